use std::collections::HashMap;

/// Capability for reading raw form fields by name.
///
/// The presentation layer owns the actual field storage (CLI arguments, a web
/// form, a test fixture); the builders never touch it directly. An absent
/// field reads as the empty string — present but possibly invalid, never a
/// distinct "missing" case.
pub trait FieldSource {
  /// Raw value of the named field.
  fn value(&self, name: &str) -> String;
}

impl FieldSource for HashMap<String, String> {
  fn value(&self, name: &str) -> String {
    self.get(name).cloned().unwrap_or_default()
  }
}

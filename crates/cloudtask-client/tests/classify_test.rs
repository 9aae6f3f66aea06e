//! Decision-table tests for response classification.

use serde_json::json;

use cloudtask_client::{
  CREATE_TASK_RULES, ConflictKind, LOOKUP_RULES, Outcome, START_TASK_RULES, STOP_TASK_RULES,
  UPLOAD_RULES, classify,
};

#[test]
fn status_200_is_success_with_parsed_payload() {
  let outcome = classify(200, r#"{"task_id":"t1"}"#, CREATE_TASK_RULES);
  assert_eq!(outcome, Outcome::Success(json!({"task_id": "t1"})));
}

#[test]
fn status_200_with_non_json_body_keeps_raw_text() {
  let outcome = classify(200, "ok", UPLOAD_RULES);
  assert_eq!(outcome, Outcome::Success(json!("ok")));
}

#[test]
fn status_400_is_fatal_regardless_of_body() {
  assert_eq!(classify(400, "anything", CREATE_TASK_RULES), Outcome::Fatal);
  assert_eq!(classify(400, "", STOP_TASK_RULES), Outcome::Fatal);
}

#[test]
fn create_recognizes_duplicate_ids() {
  let body = r#""UNIQUE constraint failed: tasks.task_id""#;
  assert_eq!(
    classify(500, body, CREATE_TASK_RULES),
    Outcome::Conflict(ConflictKind::DuplicateId)
  );
}

#[test]
fn lookup_recognizes_unregistered_entities() {
  assert_eq!(
    classify(500, r#""Task not registered""#, LOOKUP_RULES),
    Outcome::NotRegistered
  );
}

#[test]
fn unrecognized_500_is_unknown_with_the_body() {
  let outcome = classify(500, "boom", CREATE_TASK_RULES);
  assert_eq!(
    outcome,
    Outcome::Unknown {
      status: 500,
      body: "boom".to_string()
    }
  );
}

#[test]
fn start_rules_cover_missing_files_and_double_start() {
  assert_eq!(
    classify(500, r#""Task files does not exist.""#, START_TASK_RULES),
    Outcome::Conflict(ConflictKind::FilesMissing)
  );
  assert_eq!(
    classify(500, r#""Task alredy exists""#, START_TASK_RULES),
    Outcome::Conflict(ConflictKind::AlreadyStarted)
  );
  assert_eq!(
    classify(500, r#""Task not registered""#, START_TASK_RULES),
    Outcome::NotRegistered
  );
  assert_eq!(
    classify(500, r#""disk on fire""#, START_TASK_RULES),
    Outcome::Unknown {
      status: 500,
      body: "disk on fire".to_string()
    }
  );
}

#[test]
fn stop_rules_cover_never_started_and_double_stop() {
  assert_eq!(
    classify(500, r#""Task not found""#, STOP_TASK_RULES),
    Outcome::Conflict(ConflictKind::NotStarted)
  );
  assert_eq!(
    classify(500, r#""Task alredy stopped""#, STOP_TASK_RULES),
    Outcome::Conflict(ConflictKind::AlreadyStopped)
  );
}

#[test]
fn rule_sets_are_operation_specific() {
  // The stop-task tokens mean nothing to the start-task classifier and
  // vice versa.
  assert_eq!(
    classify(500, r#""Task alredy stopped""#, START_TASK_RULES),
    Outcome::Unknown {
      status: 500,
      body: "Task alredy stopped".to_string()
    }
  );
  assert_eq!(
    classify(500, r#""Task files does not exist.""#, STOP_TASK_RULES),
    Outcome::Unknown {
      status: 500,
      body: "Task files does not exist.".to_string()
    }
  );
}

#[test]
fn matching_is_ordered_first_match_wins() {
  // A body containing two tokens resolves to the earlier rule.
  let body = r#""Task files does not exist. alredy exists""#;
  assert_eq!(
    classify(500, body, START_TASK_RULES),
    Outcome::Conflict(ConflictKind::FilesMissing)
  );
}

#[test]
fn other_statuses_are_unknown_with_the_status_noted() {
  let outcome = classify(404, "gone", LOOKUP_RULES);
  assert_eq!(
    outcome,
    Outcome::Unknown {
      status: 404,
      body: "gone".to_string()
    }
  );
}

#[test]
fn classification_is_idempotent() {
  let first = classify(500, r#""Task not found""#, STOP_TASK_RULES);
  let second = classify(500, r#""Task not found""#, STOP_TASK_RULES);
  assert_eq!(first, second);
}

//! Case lifecycle operations.
//!
//! Each function here validates untrusted input and produces either a new
//! [`CaseRecord`] or a [`CaseMutation`] for a store to apply. None of them
//! touch a store; [`crate::service::Docket`] does the wiring.

use chrono::{Datelike, NaiveDate};

use crate::{
  case::{
    Assignment, CaseChange, CaseId, CaseMutation, CaseRecord, CaseStatus,
    HearingRequest, NewCase, Personnel, StatusUpdate, UpdateEntry,
  },
  error::ValidationError,
  ids::CaseIdGenerator,
  session::{Role, Session},
};

// ─── Field checks ────────────────────────────────────────────────────────────

fn is_digits(s: &str, len: usize) -> bool {
  s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// `true` if `s` is exactly 12 ASCII digits.
pub fn is_valid_aadhar(s: &str) -> bool { is_digits(s, 12) }

/// `true` if `s` is exactly 10 ASCII digits.
pub fn is_valid_mobile(s: &str) -> bool { is_digits(s, 10) }

fn required<'a>(
  value: &'a str,
  field: &'static str,
) -> Result<&'a str, ValidationError> {
  let value = value.trim();
  if value.is_empty() {
    Err(ValidationError::MissingField(field))
  } else {
    Ok(value)
  }
}

fn entry(today: NaiveDate, actor: &str, status: &str, details: String) -> UpdateEntry {
  UpdateEntry {
    date: today,
    by: actor.to_owned(),
    status: status.to_owned(),
    details,
  }
}

// ─── Registration ────────────────────────────────────────────────────────────

/// Validate a registration form and build the new case.
///
/// Aadhar is checked before mobile. An id is drawn from `ids` only once
/// validation has passed.
pub fn register(
  input: NewCase,
  today: NaiveDate,
  ids: &dyn CaseIdGenerator,
) -> Result<CaseRecord, ValidationError> {
  let aadhar = input.aadhar.trim();
  if !is_valid_aadhar(aadhar) {
    return Err(ValidationError::InvalidAadhar);
  }
  let mobile = input.mobile.trim();
  if !is_valid_mobile(mobile) {
    return Err(ValidationError::InvalidMobile);
  }

  let client = input.client.trim().to_owned();
  let seed = entry(
    today,
    &client,
    "Case Registered",
    "Case registered by client".to_owned(),
  );

  Ok(CaseRecord {
    id: ids.next_id(today.year()),
    title: input.title.trim().to_owned(),
    description: input.description.trim().to_owned(),
    case_type: input.case_type.into(),
    client,
    aadhar: aadhar.to_owned(),
    mobile: mobile.to_owned(),
    dob: input.dob.trim().to_owned(),
    gender: input.gender.trim().to_owned(),
    status: CaseStatus::Registered,
    registered_date: today,
    next_hearing: None,
    lawyer: None,
    judge: None,
    police: None,
    updates: vec![seed],
  })
}

// ─── Mutations ───────────────────────────────────────────────────────────────

/// Build the mutation for scheduling a hearing. The case moves to
/// [`CaseStatus::Hearing`] whatever its current status.
pub fn schedule_hearing(
  req: &HearingRequest,
  actor: &str,
  today: NaiveDate,
) -> Result<(CaseId, CaseMutation), ValidationError> {
  let case_id = required(&req.case_id, "case_id")?;
  let date = required(&req.date, "date")?;
  let time = required(&req.time, "time")?;

  let mutation = CaseMutation {
    change: CaseChange::HearingScheduled { at: format!("{date} {time}") },
    entry:  entry(
      today,
      actor,
      "Hearing Scheduled",
      format!("Hearing scheduled for {date} at {time}"),
    ),
  };
  Ok((CaseId::from(case_id), mutation))
}

/// Build the mutation for a status update. No transition rules apply.
pub fn update_status(
  req: &StatusUpdate,
  actor: &str,
  today: NaiveDate,
) -> Result<(CaseId, CaseMutation), ValidationError> {
  let case_id = required(&req.case_id, "case_id")?;
  let status = required(&req.status, "status")?;
  let details = required(&req.details, "details")?;
  let status: CaseStatus = status.parse()?;

  let mutation = CaseMutation {
    change: CaseChange::StatusChanged { status },
    entry:  entry(today, actor, status.update_label(), details.to_owned()),
  };
  Ok((CaseId::from(case_id), mutation))
}

/// Build the mutation for assigning a lawyer, judge or police officer.
pub fn assign_personnel(
  req: &Assignment,
  actor: &str,
  today: NaiveDate,
) -> Result<(CaseId, CaseMutation), ValidationError> {
  let case_id = required(&req.case_id, "case_id")?;
  let personnel = Personnel::try_from(req.role)?;
  let name = required(&req.name, "name")?;

  let label = personnel.label();
  let mutation = CaseMutation {
    change: CaseChange::PersonnelAssigned { personnel, name: name.to_owned() },
    entry:  entry(
      today,
      actor,
      &format!("{label} Assigned"),
      format!("{name} assigned as {}", label.to_lowercase()),
    ),
  };
  Ok((CaseId::from(case_id), mutation))
}

// ─── Listing ─────────────────────────────────────────────────────────────────

/// Filter `cases` down to what `session` may list.
///
/// Judges and police see everything. Lawyers see cases naming them plus
/// cases with no lawyer yet. Clients get no list at all; they look cases up
/// by id instead.
pub fn visible_cases(session: &Session, cases: Vec<CaseRecord>) -> Vec<CaseRecord> {
  match session.role {
    Role::Judge | Role::Police => cases,
    Role::Lawyer => cases
      .into_iter()
      .filter(|c| match c.lawyer.as_deref() {
        None | Some("") => true,
        Some(lawyer) => lawyer.contains(&session.name),
      })
      .collect(),
    Role::Client => Vec::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{ids::SequentialIds, seed::sample_cases};

  fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 5, 6).unwrap() }

  fn form(aadhar: &str, mobile: &str) -> NewCase {
    NewCase {
      case_type:   "civil".into(),
      title:       "Kumar vs. Rao".into(),
      description: "Contract dispute".into(),
      client:      "  Anil Kumar ".into(),
      aadhar:      aadhar.into(),
      mobile:      mobile.into(),
      dob:         "1980-01-01".into(),
      gender:      "male".into(),
    }
  }

  #[test]
  fn register_builds_seed_entry() {
    let ids = SequentialIds::new();
    let record = register(form("123412341234", "9999988888"), today(), &ids).unwrap();

    assert_eq!(record.id.as_str(), "C20240001");
    assert_eq!(record.status, CaseStatus::Registered);
    assert_eq!(record.client, "Anil Kumar");
    assert_eq!(record.registered_date, today());
    assert!(record.next_hearing.is_none());
    assert!(record.lawyer.is_none() && record.judge.is_none() && record.police.is_none());
    assert_eq!(record.updates, vec![UpdateEntry {
      date:    today(),
      by:      "Anil Kumar".into(),
      status:  "Case Registered".into(),
      details: "Case registered by client".into(),
    }]);
  }

  #[test]
  fn register_checks_aadhar_before_mobile() {
    let ids = SequentialIds::new();
    assert_eq!(
      register(form("12341234123", "123"), today(), &ids),
      Err(ValidationError::InvalidAadhar)
    );
    assert_eq!(
      register(form("12341234123a", "9999988888"), today(), &ids),
      Err(ValidationError::InvalidAadhar)
    );
    assert_eq!(
      register(form("123412341234", "99999-8888"), today(), &ids),
      Err(ValidationError::InvalidMobile)
    );
    // Failed validation does not consume an id.
    assert_eq!(ids.next_id(2024).as_str(), "C20240001");
  }

  #[test]
  fn digit_checks_reject_non_ascii_digits() {
    assert!(is_valid_mobile("0123456789"));
    assert!(!is_valid_mobile("０１２３４５６７８９"));
    assert!(!is_valid_aadhar(""));
  }

  #[test]
  fn hearing_requires_every_field() {
    let mut req = HearingRequest {
      case_id: "C2023001".into(),
      date:    "2024-06-01".into(),
      time:    " ".into(),
    };
    assert_eq!(
      schedule_hearing(&req, "Justice Rao", today()),
      Err(ValidationError::MissingField("time"))
    );
    req.case_id.clear();
    assert_eq!(
      schedule_hearing(&req, "Justice Rao", today()),
      Err(ValidationError::MissingField("case_id"))
    );
  }

  #[test]
  fn hearing_entry_describes_slot() {
    let req = HearingRequest {
      case_id: "C2023002".into(),
      date:    "2024-06-01".into(),
      time:    "11:15".into(),
    };
    let (id, mutation) = schedule_hearing(&req, "Justice Rao", today()).unwrap();
    assert_eq!(id.as_str(), "C2023002");
    assert_eq!(mutation.change, CaseChange::HearingScheduled {
      at: "2024-06-01 11:15".into(),
    });
    assert_eq!(mutation.entry.status, "Hearing Scheduled");
    assert_eq!(mutation.entry.details, "Hearing scheduled for 2024-06-01 at 11:15");
    assert_eq!(mutation.entry.by, "Justice Rao");
  }

  #[test]
  fn status_update_labels_entry() {
    let req = StatusUpdate {
      case_id: "C2023001".into(),
      status:  "closed".into(),
      details: "resolved".into(),
    };
    let (_, mutation) = update_status(&req, "Inspector Das", today()).unwrap();
    assert_eq!(mutation.change, CaseChange::StatusChanged {
      status: CaseStatus::Closed,
    });
    assert_eq!(mutation.entry.status, "Case Closed");
    assert_eq!(mutation.entry.details, "resolved");
  }

  #[test]
  fn status_update_rejects_missing_and_unknown_status() {
    let mut req = StatusUpdate {
      case_id: "C2023001".into(),
      status:  String::new(),
      details: "x".into(),
    };
    assert_eq!(
      update_status(&req, "a", today()),
      Err(ValidationError::MissingField("status"))
    );
    req.status = "appeal".into();
    assert_eq!(
      update_status(&req, "a", today()),
      Err(ValidationError::UnknownStatus("appeal".into()))
    );
  }

  #[test]
  fn status_update_reports_missing_details_before_bad_status() {
    let req = StatusUpdate {
      case_id: "C2023001".into(),
      status:  "bogus".into(),
      details: "  ".into(),
    };
    assert_eq!(
      update_status(&req, "a", today()),
      Err(ValidationError::MissingField("details"))
    );
  }

  #[test]
  fn assignment_entry_names_role() {
    let req = Assignment {
      case_id: "C2023003".into(),
      role:    Role::Police,
      name:    "Inspector Das".into(),
    };
    let (_, mutation) = assign_personnel(&req, "Justice Rao", today()).unwrap();
    assert_eq!(mutation.entry.status, "Police Officer Assigned");
    assert_eq!(mutation.entry.details, "Inspector Das assigned as police officer");

    let client = Assignment { role: Role::Client, ..req };
    assert_eq!(
      assign_personnel(&client, "Justice Rao", today()),
      Err(ValidationError::NotAssignable(Role::Client))
    );
  }

  #[test]
  fn lawyers_see_own_and_unassigned_cases() {
    let mut cases = sample_cases();
    cases[1].lawyer = None;
    let session = Session { role: Role::Lawyer, name: "Neha".into() };

    let ids: Vec<_> = visible_cases(&session, cases)
      .into_iter()
      .map(|c| c.id.to_string())
      .collect();
    assert_eq!(ids, ["C2023002", "C2023003"]);
  }

  #[test]
  fn staff_see_everything_and_clients_nothing() {
    let judge = Session { role: Role::Judge, name: "Rao".into() };
    let police = Session { role: Role::Police, name: "Das".into() };
    let client = Session { role: Role::Client, name: "Meena".into() };

    assert_eq!(visible_cases(&judge, sample_cases()).len(), 3);
    assert_eq!(visible_cases(&police, sample_cases()).len(), 3);
    assert!(visible_cases(&client, sample_cases()).is_empty());
  }
}

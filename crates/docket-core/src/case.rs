//! Case types: the records Docket tracks and the audit entries attached to
//! them.
//!
//! A case's biographical metadata is fixed at registration. Its status,
//! hearing and personnel fields change over time, and every change is
//! recorded as an [`UpdateEntry`] appended to the case's trail. Entries are
//! never edited or removed.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, session::Role};

// ─── Identifier ──────────────────────────────────────────────────────────────

/// A case identifier such as `C20240001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
  pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for CaseId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for CaseId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// Where a case is in its lifecycle. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
  Registered,
  Investigation,
  Hearing,
  Chargesheet,
  Closed,
}

impl CaseStatus {
  /// The lowercase code; must match the serde representation above.
  pub fn code(self) -> &'static str {
    match self {
      Self::Registered => "registered",
      Self::Investigation => "investigation",
      Self::Hearing => "hearing",
      Self::Chargesheet => "chargesheet",
      Self::Closed => "closed",
    }
  }

  /// Short label used in case listings and status badges.
  pub fn label(self) -> &'static str {
    match self {
      Self::Registered => "Registered",
      Self::Investigation => "Investigation",
      Self::Hearing => "Hearing",
      Self::Chargesheet => "Chargesheet Filed",
      Self::Closed => "Closed",
    }
  }

  /// Label written into the `status` field of an [`UpdateEntry`] when a
  /// case is moved to this status. Statuses without a dedicated phrase use
  /// their raw code.
  pub fn update_label(self) -> &'static str {
    match self {
      Self::Investigation => "Under Investigation",
      Self::Chargesheet => "Chargesheet Filed",
      Self::Closed => "Case Closed",
      other => other.code(),
    }
  }
}

impl fmt::Display for CaseStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

impl FromStr for CaseStatus {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim() {
      "registered" => Ok(Self::Registered),
      "investigation" => Ok(Self::Investigation),
      "hearing" => Ok(Self::Hearing),
      "chargesheet" => Ok(Self::Chargesheet),
      "closed" => Ok(Self::Closed),
      other => Err(ValidationError::UnknownStatus(other.to_owned())),
    }
  }
}

// ─── Case type ───────────────────────────────────────────────────────────────

/// The category of a case. The set is open: unrecognised codes are kept
/// verbatim in [`CaseType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaseType {
  Criminal,
  Civil,
  Property,
  Family,
  Other(String),
}

impl CaseType {
  pub fn code(&self) -> &str {
    match self {
      Self::Criminal => "criminal",
      Self::Civil => "civil",
      Self::Property => "property",
      Self::Family => "family",
      Self::Other(code) => code,
    }
  }
}

impl From<String> for CaseType {
  fn from(s: String) -> Self {
    match s.trim() {
      "criminal" => Self::Criminal,
      "civil" => Self::Civil,
      "property" => Self::Property,
      "family" => Self::Family,
      other => Self::Other(other.to_owned()),
    }
  }
}

impl From<CaseType> for String {
  fn from(t: CaseType) -> Self { t.code().to_owned() }
}

/// Displays the code with its first letter capitalised, e.g. `Criminal`.
impl fmt::Display for CaseType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let code = self.code();
    let mut chars = code.chars();
    match chars.next() {
      Some(first) => {
        write!(f, "{}{}", first.to_uppercase(), chars.as_str())
      }
      None => Ok(()),
    }
  }
}

// ─── Personnel ───────────────────────────────────────────────────────────────

/// The roles that can be assigned to a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personnel {
  Lawyer,
  Judge,
  Police,
}

impl Personnel {
  pub fn label(self) -> &'static str {
    match self {
      Self::Lawyer => "Lawyer",
      Self::Judge => "Judge",
      Self::Police => "Police Officer",
    }
  }
}

impl TryFrom<Role> for Personnel {
  type Error = ValidationError;

  fn try_from(role: Role) -> Result<Self, Self::Error> {
    match role {
      Role::Lawyer => Ok(Self::Lawyer),
      Role::Judge => Ok(Self::Judge),
      Role::Police => Ok(Self::Police),
      Role::Client => Err(ValidationError::NotAssignable(role)),
    }
  }
}

// ─── Update entry ────────────────────────────────────────────────────────────

/// One line of a case's audit trail. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEntry {
  pub date:    NaiveDate,
  /// Name of the person who made the change.
  pub by:      String,
  /// Human-readable label, e.g. "Hearing Scheduled".
  pub status:  String,
  pub details: String,
}

// ─── Case record ─────────────────────────────────────────────────────────────

/// A tracked legal matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
  pub id:              CaseId,
  pub title:           String,
  pub description:     String,
  pub case_type:       CaseType,
  pub client:          String,
  /// 12-digit national identity number.
  pub aadhar:          String,
  /// 10-digit phone number.
  pub mobile:          String,
  pub dob:             String,
  pub gender:          String,
  pub status:          CaseStatus,
  pub registered_date: NaiveDate,
  /// `"<date> <time>"` of the next scheduled hearing.
  pub next_hearing:    Option<String>,
  pub lawyer:          Option<String>,
  pub judge:           Option<String>,
  pub police:          Option<String>,
  /// Audit trail in insertion order. Only ever appended to.
  pub updates:         Vec<UpdateEntry>,
}

impl CaseRecord {
  /// Apply a mutation in place: the change itself plus its audit entry.
  ///
  /// This is the only path by which a stored case changes, so every
  /// mutation grows `updates` by exactly one.
  pub fn apply(&mut self, mutation: CaseMutation) {
    match mutation.change {
      CaseChange::HearingScheduled { at } => {
        self.next_hearing = Some(at);
        self.status = CaseStatus::Hearing;
      }
      CaseChange::StatusChanged { status } => {
        self.status = status;
      }
      CaseChange::PersonnelAssigned { personnel, name } => {
        let slot = match personnel {
          Personnel::Lawyer => &mut self.lawyer,
          Personnel::Judge => &mut self.judge,
          Personnel::Police => &mut self.police,
        };
        *slot = Some(name);
      }
    }
    self.updates.push(mutation.entry);
  }
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// Input to case registration, straight from an untrusted form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCase {
  pub case_type:   String,
  pub title:       String,
  #[serde(default)]
  pub description: String,
  pub client:      String,
  pub aadhar:      String,
  pub mobile:      String,
  #[serde(default)]
  pub dob:         String,
  #[serde(default)]
  pub gender:      String,
}

/// Input to [`crate::service::Docket::schedule_hearing`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HearingRequest {
  pub case_id: String,
  pub date:    String,
  pub time:    String,
}

/// Input to [`crate::service::Docket::update_status`]. `status` is the raw
/// code as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusUpdate {
  pub case_id: String,
  pub status:  String,
  pub details: String,
}

/// Input to [`crate::service::Docket::assign_personnel`].
#[derive(Debug, Clone, Deserialize)]
pub struct Assignment {
  pub case_id: String,
  pub role:    Role,
  pub name:    String,
}

// ─── Mutations ───────────────────────────────────────────────────────────────

/// What a mutation changes on a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseChange {
  /// Sets `next_hearing` and moves the case to [`CaseStatus::Hearing`].
  HearingScheduled { at: String },
  StatusChanged { status: CaseStatus },
  PersonnelAssigned { personnel: Personnel, name: String },
}

/// A change paired with the audit entry that describes it. Stores apply
/// both atomically via [`CaseRecord::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseMutation {
  pub change: CaseChange,
  pub entry:  UpdateEntry,
}

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// Read-only view of a case returned by the public status lookup.
///
/// Carries no personal data about the client: identity numbers, contact
/// details and the description stay on [`CaseRecord`], which only staff
/// can read. Optional fields are omitted entirely when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseSnapshot {
  pub id:              CaseId,
  pub title:           String,
  pub case_type:       CaseType,
  /// Capitalised category, e.g. "Property".
  pub type_label:      String,
  pub status:          CaseStatus,
  pub status_label:    &'static str,
  pub registered_date: NaiveDate,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub next_hearing:    Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lawyer:          Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub judge:           Option<String>,
  pub updates:         Vec<UpdateEntry>,
}

impl From<CaseRecord> for CaseSnapshot {
  fn from(r: CaseRecord) -> Self {
    let present = |v: Option<String>| v.filter(|s| !s.is_empty());
    Self {
      type_label:      r.case_type.to_string(),
      status_label:    r.status.label(),
      id:              r.id,
      title:           r.title,
      case_type:       r.case_type,
      status:          r.status,
      registered_date: r.registered_date,
      next_hearing:    present(r.next_hearing),
      lawyer:          present(r.lawyer),
      judge:           present(r.judge),
      updates:         r.updates,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(status: &str) -> UpdateEntry {
    UpdateEntry {
      date:    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
      by:      "Justice Rao".into(),
      status:  status.into(),
      details: String::new(),
    }
  }

  #[test]
  fn status_codes_parse() {
    assert_eq!("closed".parse::<CaseStatus>(), Ok(CaseStatus::Closed));
    assert_eq!(" hearing ".parse::<CaseStatus>(), Ok(CaseStatus::Hearing));
    assert_eq!(
      "archived".parse::<CaseStatus>(),
      Err(ValidationError::UnknownStatus("archived".into()))
    );
  }

  #[test]
  fn update_labels_fall_back_to_code() {
    assert_eq!(CaseStatus::Investigation.update_label(), "Under Investigation");
    assert_eq!(CaseStatus::Chargesheet.update_label(), "Chargesheet Filed");
    assert_eq!(CaseStatus::Closed.update_label(), "Case Closed");
    assert_eq!(CaseStatus::Hearing.update_label(), "hearing");
    assert_eq!(CaseStatus::Registered.update_label(), "registered");
  }

  #[test]
  fn case_type_keeps_unknown_codes() {
    let t = CaseType::from("tax".to_owned());
    assert_eq!(t, CaseType::Other("tax".into()));
    assert_eq!(t.to_string(), "Tax");
    assert_eq!(CaseType::Criminal.to_string(), "Criminal");

    let json = serde_json::to_string(&CaseType::Family).unwrap();
    assert_eq!(json, "\"family\"");
  }

  #[test]
  fn apply_hearing_overrides_status() {
    let mut record = crate::seed::sample_cases().remove(1);
    assert_eq!(record.status, CaseStatus::Investigation);
    let before = record.updates.len();

    record.apply(CaseMutation {
      change: CaseChange::HearingScheduled { at: "2024-02-01 10:00".into() },
      entry:  entry("Hearing Scheduled"),
    });

    assert_eq!(record.status, CaseStatus::Hearing);
    assert_eq!(record.next_hearing.as_deref(), Some("2024-02-01 10:00"));
    assert_eq!(record.updates.len(), before + 1);
  }

  #[test]
  fn apply_assignment_leaves_status() {
    let mut record = crate::seed::sample_cases().remove(2);
    assert!(record.police.is_none());

    record.apply(CaseMutation {
      change: CaseChange::PersonnelAssigned {
        personnel: Personnel::Police,
        name:      "Inspector Das".into(),
      },
      entry:  entry("Police Officer Assigned"),
    });

    assert_eq!(record.police.as_deref(), Some("Inspector Das"));
    assert_eq!(record.status, CaseStatus::Hearing);
  }

  #[test]
  fn snapshot_omits_unset_fields() {
    let mut record = crate::seed::sample_cases().remove(2);
    record.judge = Some(String::new());
    let snapshot = CaseSnapshot::from(record);
    assert_eq!(snapshot.type_label, "Family");
    assert_eq!(snapshot.status_label, "Hearing");

    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json.get("judge").is_none());
    assert_eq!(json["lawyer"], "Advocate Neha Gupta");
    assert_eq!(json["updates"].as_array().unwrap().len(), 2);
  }

  #[test]
  fn snapshot_carries_no_personal_data() {
    let snapshot = CaseSnapshot::from(crate::seed::sample_cases().remove(0));
    let json = serde_json::to_value(&snapshot).unwrap();
    for key in ["aadhar", "mobile", "dob", "gender", "client", "description", "police"] {
      assert!(json.get(key).is_none(), "{key} leaked into snapshot");
    }
    assert_eq!(json["judge"], "Justice Rajesh Kumar");
  }

  #[test]
  fn client_cannot_be_assigned() {
    assert_eq!(Personnel::try_from(Role::Judge), Ok(Personnel::Judge));
    assert_eq!(
      Personnel::try_from(Role::Client),
      Err(ValidationError::NotAssignable(Role::Client))
    );
  }
}

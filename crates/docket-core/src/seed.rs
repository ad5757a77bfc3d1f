//! Sample cases loaded into a fresh store.

use chrono::NaiveDate;

use crate::case::{CaseId, CaseRecord, CaseStatus, CaseType, UpdateEntry};

/// Only called inside `const` blocks, so a bad date fails the build.
const fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  match NaiveDate::from_ymd_opt(y, m, d) {
    Some(date) => date,
    None => panic!("invalid seed date"),
  }
}

fn update(on: NaiveDate, by: &str, status: &str, details: &str) -> UpdateEntry {
  UpdateEntry {
    date:    on,
    by:      by.to_owned(),
    status:  status.to_owned(),
    details: details.to_owned(),
  }
}

/// The three demonstration cases, in listing order.
pub fn sample_cases() -> Vec<CaseRecord> {
  vec![
    CaseRecord {
      id:              CaseId::from("C2023001"),
      title:           "State vs. Rahul Verma".into(),
      description:     "Theft case under IPC section 379".into(),
      case_type:       CaseType::Criminal,
      client:          "Rahul Verma".into(),
      aadhar:          "123456789012".into(),
      mobile:          "9876543210".into(),
      dob:             "1990-05-15".into(),
      gender:          "male".into(),
      status:          CaseStatus::Hearing,
      registered_date: const { date(2023, 1, 10) },
      next_hearing:    Some("2023-06-20 10:30".into()),
      lawyer:          Some("Advocate Priya Sharma".into()),
      judge:           Some("Justice Rajesh Kumar".into()),
      police:          Some("Inspector Vikram Singh".into()),
      updates:         vec![
        update(
          const { date(2023, 1, 15) },
          "Inspector Vikram Singh",
          "Under Investigation",
          "Initial investigation started, evidence collected",
        ),
        update(
          const { date(2023, 3, 10) },
          "Justice Rajesh Kumar",
          "First Hearing",
          "Bail granted, next hearing scheduled",
        ),
      ],
    },
    CaseRecord {
      id:              CaseId::from("C2023002"),
      title:           "Sharma vs. Gupta Property Dispute".into(),
      description:     "Property dispute over ancestral land".into(),
      case_type:       CaseType::Property,
      client:          "Rajesh Sharma".into(),
      aadhar:          "987654321098".into(),
      mobile:          "8765432109".into(),
      dob:             "1975-11-22".into(),
      gender:          "male".into(),
      status:          CaseStatus::Investigation,
      registered_date: const { date(2023, 2, 5) },
      next_hearing:    None,
      lawyer:          Some("Advocate Amit Patel".into()),
      judge:           Some("Justice Anjali Desai".into()),
      police:          Some("Sub-Inspector Ramesh Kumar".into()),
      updates:         vec![update(
        const { date(2023, 2, 10) },
        "Sub-Inspector Ramesh Kumar",
        "Under Investigation",
        "Site inspection completed, documents being verified",
      )],
    },
    CaseRecord {
      id:              CaseId::from("C2023003"),
      title:           "Patel vs. Patel Divorce Case".into(),
      description:     "Divorce petition with child custody dispute".into(),
      case_type:       CaseType::Family,
      client:          "Meena Patel".into(),
      aadhar:          "567890123456".into(),
      mobile:          "7654321098".into(),
      dob:             "1985-08-30".into(),
      gender:          "female".into(),
      status:          CaseStatus::Hearing,
      registered_date: const { date(2023, 3, 15) },
      next_hearing:    Some("2023-07-05 14:00".into()),
      lawyer:          Some("Advocate Neha Gupta".into()),
      judge:           Some("Justice Sanjay Malhotra".into()),
      police:          None,
      updates:         vec![
        update(
          const { date(2023, 3, 20) },
          "Advocate Neha Gupta",
          "Petition Filed",
          "Divorce petition filed with family court",
        ),
        update(
          const { date(2023, 4, 10) },
          "Justice Sanjay Malhotra",
          "First Hearing",
          "Interim maintenance ordered, next hearing scheduled",
        ),
      ],
    },
  ]
}

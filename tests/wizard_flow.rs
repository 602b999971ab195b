use std::sync::{Arc, Mutex};

use booking_wizard::{
    availability::OpeningHours,
    booking::{BookingWizard, FormField, WizardEvent, WizardObserver, WizardStep},
    catalog::Catalog,
    init,
    time::FixedClock,
};
use chrono::NaiveDate;

struct Log(Arc<Mutex<Vec<String>>>);

impl WizardObserver for Log {
    fn notify(&mut self, event: &WizardEvent) {
        let tag = match event {
            WizardEvent::StepEntered(step) => format!("step:{}", step.number()),
            WizardEvent::Confirmed(_) => "confirmed".to_string(),
            WizardEvent::Restarted => "restarted".to_string(),
            _ => return,
        };
        self.0.lock().unwrap().push(tag);
    }
}

fn wizard() -> BookingWizard {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    BookingWizard::new(
        Catalog::barbershop(),
        OpeningHours::default(),
        Box::new(FixedClock::new(today)),
    )
}

#[test]
fn booking_walks_every_step() {
    init();
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut wizard = wizard();
    wizard.subscribe(Box::new(Log(Arc::clone(&log))));

    wizard.select_service(3).unwrap();
    wizard.select_provider(3).unwrap();
    wizard.advance_step().unwrap();
    wizard
        .select_date(NaiveDate::from_ymd_opt(2026, 10, 24).unwrap())
        .unwrap();
    wizard.select_time("10:00").unwrap();
    wizard.advance_step().unwrap();
    wizard
        .set_contact_field(FormField::Name, "Eva Malá")
        .unwrap();
    wizard
        .set_contact_field(FormField::Email, "eva@example.com")
        .unwrap();
    wizard
        .set_contact_field(FormField::Phone, "+420 777 888 999")
        .unwrap();
    wizard.submit().unwrap();

    assert_eq!(wizard.step(), WizardStep::Success);
    let summary = wizard.summary();
    assert_eq!(summary.service, "Haircut + beard");
    assert_eq!(summary.price, "650 Kč");
    assert_eq!(summary.date, "24 October 2026");

    wizard.restart();
    assert_eq!(wizard.step(), WizardStep::Service);
    assert!(wizard.state().service().is_none());

    let log = log.lock().unwrap();
    assert_eq!(
        *log,
        vec!["step:2", "step:3", "step:4", "confirmed", "restarted", "step:1"]
    );
}

#[test]
fn custom_catalog_drives_eligibility() {
    let catalog = Catalog::from_json_str(
        r#"{
            "services": [
                { "id": 7, "name": "Manicure", "icon": "💅", "duration_minutes": 40, "price": 500 }
            ],
            "providers": [
                { "id": 1, "name": "Alena Nová", "initials": "AN", "services": [7] },
                { "id": 2, "name": "Petr Malý", "initials": "PM", "services": [] }
            ]
        }"#,
    )
    .unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let mut wizard = BookingWizard::new(
        catalog,
        OpeningHours::default(),
        Box::new(FixedClock::new(today)),
    );
    wizard.select_service(7).unwrap();
    let eligible: Vec<u32> = wizard.eligible_providers().iter().map(|p| p.id).collect();
    assert_eq!(eligible, vec![1]);
    assert!(wizard.select_provider(2).is_err());
}

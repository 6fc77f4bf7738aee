// ABOUTME: Consultation commands for nutriwell-cli
// ABOUTME: Lists the doctor directory and books consultations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDate};
use nutriwell::consultation::{BookingRequest, ConsultationType, Doctor, DoctorDirectory};
use nutriwell::errors::AppResult;

/// Print doctors, optionally filtered by specialty
pub fn list(specialty: Option<&str>) {
    let directory = DoctorDirectory::default();
    let doctors: Vec<&Doctor> = match specialty {
        Some(query) => directory.by_specialty(query),
        None => directory.doctors().iter().collect(),
    };

    if doctors.is_empty() {
        println!("No doctors match that specialty.");
        return;
    }
    for doctor in doctors {
        println!(
            "[{}] {} - {} ({:.1}/5, {} patients, {} yrs) ${}",
            doctor.id,
            doctor.name,
            doctor.specialty,
            doctor.rating,
            doctor.patients,
            doctor.experience_years,
            doctor.price_usd
        );
        println!("    slots: {}", doctor.available_slots.join(", "));
    }
}

/// Book a consultation and print the confirmation
pub fn book(
    doctor_id: u32,
    date: NaiveDate,
    time: String,
    consultation_type: ConsultationType,
) -> AppResult<()> {
    let mut directory = DoctorDirectory::default();
    let request = BookingRequest {
        doctor_id,
        date,
        time,
        consultation_type,
    };
    let confirmation = directory.book(&request, Local::now().date_naive())?;
    println!("{}", confirmation.message());
    println!("Confirmation id: {}", confirmation.id);
    Ok(())
}

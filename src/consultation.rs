// ABOUTME: Mock doctor directory and consultation booking
// ABOUTME: Validates doctor, slot, and date, then issues a confirmation with the price
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Consultation booking against a fixed, in-memory doctor directory.
//! Nothing is sent anywhere; a confirmation is just a value.

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// How the consultation takes place
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationType {
    /// Face-to-face video call
    #[default]
    Video,
    /// Voice-only call
    Audio,
    /// Text-based chat
    Chat,
}

impl ConsultationType {
    /// Display name
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Video => "Video Consultation",
            Self::Audio => "Audio Call",
            Self::Chat => "Chat Consultation",
        }
    }

    /// One-line description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Video => "Face-to-face video call with your doctor",
            Self::Audio => "Voice-only consultation",
            Self::Chat => "Text-based consultation",
        }
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConsultationType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "chat" => Ok(Self::Chat),
            other => Err(AppError::invalid_input(format!(
                "unknown consultation type '{other}' (expected video, audio or chat)"
            ))),
        }
    }
}

/// A doctor who can be booked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Directory id
    pub id: u32,
    /// Full name
    pub name: String,
    /// Medical specialty
    pub specialty: String,
    /// Average rating out of 5
    pub rating: f64,
    /// Number of patients seen
    pub patients: u32,
    /// Years of experience
    pub experience_years: u32,
    /// Bookable start times ("HH:MM")
    pub available_slots: Vec<String>,
    /// Price per consultation in USD
    pub price_usd: u32,
}

impl Doctor {
    #[allow(clippy::too_many_arguments)] // One argument per listing column
    fn mock(
        id: u32,
        name: &str,
        specialty: &str,
        rating: f64,
        patients: u32,
        experience_years: u32,
        slots: [&str; 4],
        price_usd: u32,
    ) -> Self {
        Self {
            id,
            name: name.to_owned(),
            specialty: specialty.to_owned(),
            rating,
            patients,
            experience_years,
            available_slots: slots.iter().map(|s| (*s).to_owned()).collect(),
            price_usd,
        }
    }
}

/// What the user asks to book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Doctor to see
    pub doctor_id: u32,
    /// Day of the consultation
    pub date: NaiveDate,
    /// Start time ("HH:MM"), one of the doctor's slots
    pub time: String,
    /// Consultation channel
    pub consultation_type: ConsultationType,
}

/// Issued once a booking is accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Confirmation id
    pub id: Uuid,
    /// Doctor id
    pub doctor_id: u32,
    /// Doctor name
    pub doctor_name: String,
    /// Day of the consultation
    pub date: NaiveDate,
    /// Start time
    pub time: String,
    /// Consultation channel
    pub consultation_type: ConsultationType,
    /// Price in USD
    pub price_usd: u32,
    /// When the booking was made
    pub booked_at: DateTime<Utc>,
}

impl BookingConfirmation {
    /// Confirmation message shown to the user
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Booking confirmed with {} on {} at {} ({}, ${})",
            self.doctor_name, self.date, self.time, self.consultation_type, self.price_usd
        )
    }
}

/// In-memory directory of bookable doctors
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
    booked: HashSet<(u32, NaiveDate, String)>,
}

impl Default for DoctorDirectory {
    fn default() -> Self {
        Self::new(vec![
            Doctor::mock(
                1,
                "Dr. Sarah Johnson",
                "Nutritionist & Dietitian",
                4.9,
                1200,
                8,
                ["09:00", "10:00", "14:00", "15:00"],
                75,
            ),
            Doctor::mock(
                2,
                "Dr. Michael Chen",
                "Endocrinologist",
                4.8,
                950,
                12,
                ["11:00", "13:00", "16:00", "17:00"],
                120,
            ),
            Doctor::mock(
                3,
                "Dr. Emily Rodriguez",
                "Cardiologist",
                4.9,
                800,
                15,
                ["08:00", "12:00", "15:00", "18:00"],
                150,
            ),
            Doctor::mock(
                4,
                "Dr. James Wilson",
                "Gastroenterologist",
                4.7,
                1100,
                10,
                ["10:00", "14:00", "16:00", "19:00"],
                130,
            ),
        ])
    }
}

impl DoctorDirectory {
    /// Directory over an explicit doctor list
    #[must_use]
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self {
            doctors,
            booked: HashSet::new(),
        }
    }

    /// All doctors, in listing order
    #[must_use]
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Doctor by id
    #[must_use]
    pub fn find(&self, id: u32) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    /// Doctors whose specialty contains `query`, ignoring case
    #[must_use]
    pub fn by_specialty(&self, query: &str) -> Vec<&Doctor> {
        let query = query.trim().to_lowercase();
        self.doctors
            .iter()
            .filter(|d| d.specialty.to_lowercase().contains(&query))
            .collect()
    }

    /// Book a consultation
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the doctor does not exist
    /// - `InvalidInput` if the date is before `today` or the time is not one
    ///   of the doctor's slots
    /// - `ResourceUnavailable` if the slot is already booked on that date
    pub fn book(
        &mut self,
        request: &BookingRequest,
        today: NaiveDate,
    ) -> AppResult<BookingConfirmation> {
        let result = self.try_book(request, today);
        AppLogger::log_booking(
            request.doctor_id,
            &request.date.to_string(),
            &request.time,
            result.is_ok(),
        );
        result
    }

    fn try_book(
        &mut self,
        request: &BookingRequest,
        today: NaiveDate,
    ) -> AppResult<BookingConfirmation> {
        let doctor = self
            .find(request.doctor_id)
            .ok_or_else(|| AppError::not_found(format!("Doctor {}", request.doctor_id)))?;

        if request.date < today {
            return Err(AppError::invalid_input(format!(
                "cannot book a consultation in the past ({})",
                request.date
            )));
        }
        let time = request.time.trim();
        if !doctor.available_slots.iter().any(|slot| slot == time) {
            return Err(AppError::invalid_input(format!(
                "{} is not available at {time} (available: {})",
                doctor.name,
                doctor.available_slots.join(", ")
            )));
        }

        let confirmation = BookingConfirmation {
            id: Uuid::new_v4(),
            doctor_id: doctor.id,
            doctor_name: doctor.name.clone(),
            date: request.date,
            time: time.to_owned(),
            consultation_type: request.consultation_type,
            price_usd: doctor.price_usd,
            booked_at: Utc::now(),
        };

        if !self
            .booked
            .insert((confirmation.doctor_id, confirmation.date, confirmation.time.clone()))
        {
            return Err(AppError::unavailable(format!(
                "{} is already booked on {} at {time}",
                confirmation.doctor_name, confirmation.date
            )));
        }
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriwell_core::errors::ErrorCode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn request(doctor_id: u32, days_ahead: i64, time: &str) -> BookingRequest {
        BookingRequest {
            doctor_id,
            date: today() + chrono::Duration::days(days_ahead),
            time: time.to_owned(),
            consultation_type: ConsultationType::Video,
        }
    }

    #[test]
    fn test_default_directory() {
        let directory = DoctorDirectory::default();
        assert_eq!(directory.doctors().len(), 4);
        assert_eq!(directory.find(2).map(|d| d.price_usd), Some(120));
        assert_eq!(directory.by_specialty("cardio").len(), 1);
    }

    #[test]
    fn test_book_success_carries_price() {
        let mut directory = DoctorDirectory::default();
        let confirmation = directory.book(&request(1, 1, "09:00"), today()).unwrap();
        assert_eq!(confirmation.price_usd, 75);
        assert_eq!(confirmation.doctor_name, "Dr. Sarah Johnson");
        assert!(confirmation.message().contains("Dr. Sarah Johnson"));
    }

    #[test]
    fn test_book_errors() {
        let mut directory = DoctorDirectory::default();

        let err = directory.book(&request(9, 1, "09:00"), today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);

        let err = directory.book(&request(1, -1, "09:00"), today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        let err = directory.book(&request(1, 0, "11:00"), today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        directory.book(&request(1, 0, "10:00"), today()).unwrap();
        let err = directory.book(&request(1, 0, "10:00"), today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceUnavailable);
    }
}

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::models::appointment::{
    Appointment, NewAppointmentParams, ServiceSnapshot, STATUS_COMPLETED,
};
use crate::domain::models::customer::{normalize_phone, Customer};
use crate::domain::models::professional::Professional;
use crate::domain::models::venue::Venue;
use crate::domain::ports::{
    AppointmentRepository, BlockRepository, Clock, CustomerRepository, NotificationService,
    ProfessionalRepository, ServiceRepository, VenueRepository,
};
use crate::domain::services::conflict::has_conflict;
use crate::domain::services::recurrence::{expand_dates, RecurrenceType};
use crate::domain::services::schedule::resolve_day;
use crate::error::AppError;

/// One async mutex per professional. Holding a professional's lock across
/// the validate-and-persist sequence is what makes concurrent bookings for
/// the same professional lose cleanly instead of double-booking.
/// The registry is per-process; multi-writer deployments would need a
/// storage-level exclusion constraint instead.
#[derive(Default)]
pub struct ProfessionalLocks {
    inner: StdMutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl ProfessionalLocks {
    pub async fn acquire(&self, professional_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().expect("lock registry poisoned");
            map.entry(professional_id.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

#[derive(Debug, Clone)]
pub struct RecurrenceRule {
    pub kind: RecurrenceType,
    pub count: Option<u32>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub venue_id: String,
    pub professional_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub service_ids: Vec<String>,
    pub recurrence: Option<RecurrenceRule>,
}

#[derive(Debug)]
pub enum BookingOutcome {
    Single(Appointment),
    Series(Vec<Appointment>),
}

pub struct BookingService {
    venue_repo: Arc<dyn VenueRepository>,
    professional_repo: Arc<dyn ProfessionalRepository>,
    service_repo: Arc<dyn ServiceRepository>,
    appointment_repo: Arc<dyn AppointmentRepository>,
    block_repo: Arc<dyn BlockRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    notifier: Arc<dyn NotificationService>,
    clock: Arc<dyn Clock>,
    locks: ProfessionalLocks,
}

impl BookingService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        venue_repo: Arc<dyn VenueRepository>,
        professional_repo: Arc<dyn ProfessionalRepository>,
        service_repo: Arc<dyn ServiceRepository>,
        appointment_repo: Arc<dyn AppointmentRepository>,
        block_repo: Arc<dyn BlockRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
        notifier: Arc<dyn NotificationService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            venue_repo,
            professional_repo,
            service_repo,
            appointment_repo,
            block_repo,
            customer_repo,
            notifier,
            clock,
            locks: ProfessionalLocks::default(),
        }
    }

    pub async fn create(&self, params: CreateAppointmentParams) -> Result<BookingOutcome, AppError> {
        if params.customer_name.trim().is_empty() {
            return Err(AppError::Validation("Customer name is required".into()));
        }
        let clean_phone = normalize_phone(&params.customer_phone);
        if clean_phone.is_empty() {
            return Err(AppError::Validation("Customer phone is required".into()));
        }
        if params.service_ids.is_empty() {
            return Err(AppError::Validation("At least one service is required".into()));
        }

        let venue = self
            .venue_repo
            .find_by_id(&params.venue_id)
            .await?
            .ok_or(AppError::NotFound("Venue not found".into()))?;

        let professional = self
            .professional_repo
            .find_by_id(&params.venue_id, &params.professional_id)
            .await?
            .ok_or(AppError::NotFound("Professional not found".into()))?;

        let services = self
            .service_repo
            .find_by_ids(&params.venue_id, &params.service_ids)
            .await?;
        for id in &params.service_ids {
            if !services.iter().any(|s| &s.id == id) {
                return Err(AppError::Validation(format!("Service not found: {}", id)));
            }
        }

        let total_duration: i64 = services.iter().map(|s| s.duration_min as i64).sum();
        if total_duration <= 0 {
            return Err(AppError::Validation("Total service duration must be positive".into()));
        }
        let snapshots: Vec<ServiceSnapshot> = services.iter().map(ServiceSnapshot::from).collect();

        let start_time = params.date.and_time(params.start);
        let end_time = start_time + Duration::minutes(total_duration);

        let now_local = self.venue_local_now(&venue);
        if start_time < now_local {
            return Err(AppError::Validation("Cannot book in the past".into()));
        }

        // Everything from conflict validation to insert runs under the
        // professional's lock; a concurrent request for the same slot waits
        // here and then fails its own re-check.
        let _guard = self.locks.acquire(&params.professional_id).await;

        match &params.recurrence {
            None => {
                if self
                    .slot_conflicts(&venue, &professional, start_time, end_time)
                    .await?
                {
                    return Err(AppError::SlotUnavailable);
                }

                let customer = self
                    .upsert_customer(&params.venue_id, &params.customer_name, &clean_phone, &params.customer_phone)
                    .await?;

                let appointment = self
                    .persist_appointment(&params, &customer, snapshots, start_time, end_time, None, None)
                    .await?;

                info!(
                    appointment_id = %appointment.id,
                    professional_id = %appointment.professional_id,
                    "Appointment confirmed"
                );
                self.notify_confirmation(&appointment);

                Ok(BookingOutcome::Single(appointment))
            }
            Some(rule) => {
                let dates = expand_dates(params.date, rule.kind, rule.count, rule.end_date);

                // Validate every occurrence before writing anything: a single
                // conflict rejects the whole series.
                for occurrence in &dates {
                    let occ_start = occurrence.and_time(params.start);
                    let occ_end = occ_start + Duration::minutes(total_duration);
                    if self
                        .slot_conflicts(&venue, &professional, occ_start, occ_end)
                        .await?
                    {
                        return Err(AppError::RecurrenceConflict(*occurrence));
                    }
                }

                let customer = self
                    .upsert_customer(&params.venue_id, &params.customer_name, &clean_phone, &params.customer_phone)
                    .await?;

                let recurrence_id = Uuid::new_v4().to_string();
                let mut appointments = Vec::with_capacity(dates.len());

                for occurrence in &dates {
                    let occ_start = occurrence.and_time(params.start);
                    let occ_end = occ_start + Duration::minutes(total_duration);
                    let appointment = self
                        .persist_appointment(
                            &params,
                            &customer,
                            snapshots.clone(),
                            occ_start,
                            occ_end,
                            Some(recurrence_id.clone()),
                            Some(rule.kind.as_str().to_string()),
                        )
                        .await?;
                    appointments.push(appointment);
                }

                info!(
                    recurrence_id = %recurrence_id,
                    occurrences = appointments.len(),
                    "Recurring series confirmed"
                );
                if let Some(first) = appointments.first() {
                    self.notify_confirmation(first);
                }

                Ok(BookingOutcome::Series(appointments))
            }
        }
    }

    /// Cancels one occurrence, authorized by the customer's phone. With
    /// `cancel_future` on a recurring appointment, removes every occurrence
    /// of the series from this one forward.
    pub async fn cancel(
        &self,
        venue_id: &str,
        appointment_id: &str,
        requester_phone: &str,
        cancel_future: bool,
    ) -> Result<(), AppError> {
        let appointment = self
            .appointment_repo
            .find_by_id(venue_id, appointment_id)
            .await?
            .ok_or(AppError::NotFound("Appointment not found".into()))?;

        if normalize_phone(&appointment.customer_phone) != normalize_phone(requester_phone) {
            return Err(AppError::Forbidden("Phone does not match this appointment".into()));
        }

        if appointment.status == STATUS_COMPLETED {
            return Err(AppError::Validation(
                "Cannot cancel an appointment that already took place".into(),
            ));
        }

        match (&appointment.recurrence_id, cancel_future) {
            (Some(recurrence_id), true) => {
                let removed = self
                    .appointment_repo
                    .delete_series_from(venue_id, recurrence_id, appointment.start_time)
                    .await?;
                info!(
                    recurrence_id = %recurrence_id,
                    removed,
                    "Recurring series cancelled from occurrence onward"
                );
            }
            _ => {
                self.appointment_repo.delete(venue_id, appointment_id).await?;
                info!(appointment_id = %appointment_id, "Appointment cancelled");
            }
        }

        Ok(())
    }

    fn venue_local_now(&self, venue: &Venue) -> NaiveDateTime {
        let tz: Tz = venue.timezone.parse().unwrap_or(chrono_tz::UTC);
        self.clock.now_utc().with_timezone(&tz).naive_local()
    }

    async fn slot_conflicts(
        &self,
        venue: &Venue,
        professional: &Professional,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<bool, AppError> {
        let day_start = start.date().and_hms_opt(0, 0, 0).expect("midnight exists");
        let day_end = day_start + Duration::days(1);

        let appointments = self
            .appointment_repo
            .list_for_professional(&venue.id, &professional.id, day_start, day_end)
            .await?;
        let blocks = self
            .block_repo
            .list_for_professional(&venue.id, &professional.id, day_start, day_end)
            .await?;

        let venue_hours = venue.week_schedule();
        let pro_hours = professional.week_schedule();
        let day = resolve_day(&venue_hours, pro_hours.as_ref(), start.date())?;

        Ok(has_conflict(day.as_ref(), start, end, &appointments, &blocks))
    }

    async fn upsert_customer(
        &self,
        venue_id: &str,
        name: &str,
        clean_phone: &str,
        raw_phone: &str,
    ) -> Result<Customer, AppError> {
        match self
            .customer_repo
            .find_by_phone(venue_id, clean_phone, raw_phone)
            .await?
        {
            Some(mut customer) => {
                if !name.is_empty() && customer.name != name {
                    customer.name = name.to_string();
                }
                customer.phone = clean_phone.to_string();
                customer.last_appointment = Some(Utc::now());
                self.customer_repo.update(&customer).await
            }
            None => {
                let customer =
                    Customer::new(venue_id.to_string(), name.to_string(), clean_phone.to_string());
                self.customer_repo.create(&customer).await
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn persist_appointment(
        &self,
        params: &CreateAppointmentParams,
        customer: &Customer,
        services: Vec<ServiceSnapshot>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        recurrence_id: Option<String>,
        recurrence_type: Option<String>,
    ) -> Result<Appointment, AppError> {
        let appointment = Appointment::new(NewAppointmentParams {
            venue_id: params.venue_id.clone(),
            professional_id: params.professional_id.clone(),
            customer_id: customer.id.clone(),
            services,
            start_time,
            end_time,
            customer_name: params.customer_name.clone(),
            customer_phone: params.customer_phone.clone(),
            recurrence_id,
            recurrence_type,
        });
        self.appointment_repo.create(&appointment).await
    }

    fn notify_confirmation(&self, appointment: &Appointment) {
        let notifier = self.notifier.clone();
        let appointment = appointment.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.send_confirmation(&appointment).await {
                warn!(appointment_id = %appointment.id, "Confirmation notification failed: {}", e);
            }
        });
    }
}

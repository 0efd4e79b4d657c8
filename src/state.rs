use std::sync::Arc;
use crate::domain::ports::{
    AppointmentRepository, BlockRepository, Clock, CustomerRepository,
    NotificationService, ProfessionalRepository, ServiceRepository, VenueRepository,
};
use crate::domain::services::booking::BookingService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub venue_repo: Arc<dyn VenueRepository>,
    pub professional_repo: Arc<dyn ProfessionalRepository>,
    pub service_repo: Arc<dyn ServiceRepository>,
    pub appointment_repo: Arc<dyn AppointmentRepository>,
    pub block_repo: Arc<dyn BlockRepository>,
    pub customer_repo: Arc<dyn CustomerRepository>,
    pub notification_service: Arc<dyn NotificationService>,
    pub clock: Arc<dyn Clock>,
    pub booking_service: Arc<BookingService>,
}

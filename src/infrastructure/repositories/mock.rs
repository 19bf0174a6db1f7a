use crate::domain::appointments::{
    Appointment, AppointmentRepository, NewAppointment, UpdateAppointment,
};
use crate::domain::professionals::{Professional, ProfessionalData, ProfessionalRepository};
use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MockProfessionalRepository {
    professionals: Arc<Mutex<Vec<Professional>>>,
    next_id: Arc<AtomicI64>,
}

impl MockProfessionalRepository {
    fn sorted(professionals: &[Professional]) -> Vec<Professional> {
        let mut sorted = professionals.to_vec();
        sorted.sort_by(|a, b| a.social_name.cmp(&b.social_name).then(a.id.cmp(&b.id)));
        sorted
    }
}

#[async_trait]
impl ProfessionalRepository for MockProfessionalRepository {
    async fn create(&self, data: ProfessionalData) -> Result<Professional, anyhow::Error> {
        let now = OffsetDateTime::now_utc();
        let mut contacts = data.contacts;
        contacts.sort_by_key(|c| c.kind.as_str());

        let professional = Professional {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            uuid: Uuid::new_v4(),
            social_name: data.social_name,
            profession: data.profession,
            address: Some(data.address),
            contacts,
            created_at: now,
            updated_at: now,
        };
        self.professionals.lock().unwrap().push(professional.clone());
        Ok(professional)
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Professional>, anyhow::Error> {
        let professionals = self.professionals.lock().unwrap();
        Ok(professionals.iter().find(|p| p.uuid == uuid).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Professional>, anyhow::Error> {
        let professionals = self.professionals.lock().unwrap();
        let found: Vec<Professional> = professionals
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect();
        Ok(Self::sorted(&found))
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Professional>, anyhow::Error> {
        let professionals = self.professionals.lock().unwrap();
        Ok(Self::sorted(&professionals)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<i64, anyhow::Error> {
        Ok(self.professionals.lock().unwrap().len() as i64)
    }

    async fn update(
        &self,
        id: i64,
        data: ProfessionalData,
    ) -> Result<Option<Professional>, anyhow::Error> {
        let mut professionals = self.professionals.lock().unwrap();
        let Some(professional) = professionals.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        let mut contacts = data.contacts;
        contacts.sort_by_key(|c| c.kind.as_str());

        professional.social_name = data.social_name;
        professional.profession = data.profession;
        professional.address = Some(data.address);
        professional.contacts = contacts;
        professional.updated_at = OffsetDateTime::now_utc();

        Ok(Some(professional.clone()))
    }

    async fn delete(&self, uuid: Uuid) -> Result<bool, anyhow::Error> {
        let mut professionals = self.professionals.lock().unwrap();
        let before = professionals.len();
        professionals.retain(|p| p.uuid != uuid);
        Ok(professionals.len() < before)
    }
}

/// Shares the professional store so the joined uuid can be resolved.
#[derive(Clone)]
pub struct MockAppointmentRepository {
    appointments: Arc<Mutex<Vec<Appointment>>>,
    professionals: MockProfessionalRepository,
    next_id: Arc<AtomicI64>,
}

impl MockAppointmentRepository {
    pub fn new(professionals: MockProfessionalRepository) -> Self {
        Self {
            appointments: Arc::new(Mutex::new(Vec::new())),
            professionals,
            next_id: Arc::new(AtomicI64::new(0)),
        }
    }

    fn professional_uuid(&self, professional_id: i64) -> Result<Uuid, anyhow::Error> {
        self.professionals
            .professionals
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == professional_id)
            .map(|p| p.uuid)
            .ok_or_else(|| anyhow::anyhow!("foreign key violation: professional {}", professional_id))
    }

    fn matching(&self, professional_uuid: Option<Uuid>) -> Vec<Appointment> {
        let mut matching: Vec<Appointment> = self
            .appointments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| professional_uuid.is_none_or(|uuid| a.professional_uuid == uuid))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        matching
    }
}

#[async_trait]
impl AppointmentRepository for MockAppointmentRepository {
    async fn create(&self, new_appointment: NewAppointment) -> Result<Appointment, anyhow::Error> {
        let now = OffsetDateTime::now_utc();
        let appointment = Appointment {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            uuid: Uuid::new_v4(),
            date: new_appointment.date,
            professional_id: new_appointment.professional_id,
            professional_uuid: self.professional_uuid(new_appointment.professional_id)?,
            created_at: now,
            updated_at: now,
        };
        self.appointments.lock().unwrap().push(appointment.clone());
        Ok(appointment)
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Appointment>, anyhow::Error> {
        let appointments = self.appointments.lock().unwrap();
        Ok(appointments.iter().find(|a| a.uuid == uuid).cloned())
    }

    async fn find_all(
        &self,
        professional_uuid: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Appointment>, anyhow::Error> {
        Ok(self
            .matching(professional_uuid)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, professional_uuid: Option<Uuid>) -> Result<i64, anyhow::Error> {
        Ok(self.matching(professional_uuid).len() as i64)
    }

    async fn update(
        &self,
        id: i64,
        update: UpdateAppointment,
    ) -> Result<Option<Appointment>, anyhow::Error> {
        let professional_uuid = match update.professional_id {
            Some(professional_id) => Some(self.professional_uuid(professional_id)?),
            None => None,
        };

        let mut appointments = self.appointments.lock().unwrap();
        let Some(appointment) = appointments.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        if let Some(date) = update.date {
            appointment.date = date;
        }
        if let (Some(professional_id), Some(uuid)) = (update.professional_id, professional_uuid) {
            appointment.professional_id = professional_id;
            appointment.professional_uuid = uuid;
        }
        appointment.updated_at = OffsetDateTime::now_utc();

        Ok(Some(appointment.clone()))
    }

    async fn delete(&self, uuid: Uuid) -> Result<bool, anyhow::Error> {
        let mut appointments = self.appointments.lock().unwrap();
        let before = appointments.len();
        appointments.retain(|a| a.uuid != uuid);
        Ok(appointments.len() < before)
    }
}

//! Government directory use-case service: officials, departments, and
//! public services.

use crate::model::department::{Department, DepartmentPatch, NewDepartment};
use crate::model::official::{NewOfficial, Official, OfficialPatch};
use crate::model::public_service::{NewPublicService, PublicService, PublicServicePatch};
use crate::model::EntityId;
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::official_repo::OfficialRepository;
use crate::repo::public_service_repo::PublicServiceRepository;
use crate::service::ServiceResult;

/// Directory facade over the officials, departments, and public services
/// repositories.
pub struct DirectoryService<O, D, P>
where
    O: OfficialRepository,
    D: DepartmentRepository,
    P: PublicServiceRepository,
{
    officials: O,
    departments: D,
    services: P,
}

impl<O, D, P> DirectoryService<O, D, P>
where
    O: OfficialRepository,
    D: DepartmentRepository,
    P: PublicServiceRepository,
{
    pub fn new(officials: O, departments: D, services: P) -> Self {
        Self {
            officials,
            departments,
            services,
        }
    }

    // Officials

    /// Validates (including the social media link map) and stores one
    /// official.
    pub fn create_official(&self, input: &NewOfficial) -> ServiceResult<Official> {
        input.validate()?;
        Ok(self.officials.create_official(input)?)
    }

    pub fn get_official(&self, id: EntityId) -> ServiceResult<Option<Official>> {
        Ok(self.officials.get_official(id)?)
    }

    pub fn list_officials(&self) -> ServiceResult<Vec<Official>> {
        Ok(self.officials.list_officials()?)
    }

    /// Governor and vice-governor entries, classified at query time from
    /// position text.
    pub fn list_leadership_officials(&self) -> ServiceResult<Vec<Official>> {
        Ok(self.officials.list_leadership_officials()?)
    }

    pub fn update_official(
        &self,
        id: EntityId,
        patch: &OfficialPatch,
    ) -> ServiceResult<Option<Official>> {
        patch.validate()?;
        Ok(self.officials.update_official(id, patch)?)
    }

    pub fn delete_official(&self, id: EntityId) -> ServiceResult<bool> {
        Ok(self.officials.delete_official(id)?)
    }

    // Departments

    pub fn create_department(&self, input: &NewDepartment) -> ServiceResult<Department> {
        input.validate()?;
        Ok(self.departments.create_department(input)?)
    }

    pub fn get_department(&self, id: EntityId) -> ServiceResult<Option<Department>> {
        Ok(self.departments.get_department(id)?)
    }

    pub fn list_departments(&self) -> ServiceResult<Vec<Department>> {
        Ok(self.departments.list_departments()?)
    }

    pub fn update_department(
        &self,
        id: EntityId,
        patch: &DepartmentPatch,
    ) -> ServiceResult<Option<Department>> {
        patch.validate()?;
        Ok(self.departments.update_department(id, patch)?)
    }

    pub fn delete_department(&self, id: EntityId) -> ServiceResult<bool> {
        Ok(self.departments.delete_department(id)?)
    }

    // Public services

    pub fn create_service(&self, input: &NewPublicService) -> ServiceResult<PublicService> {
        input.validate()?;
        Ok(self.services.create_service(input)?)
    }

    pub fn get_service(&self, id: EntityId) -> ServiceResult<Option<PublicService>> {
        Ok(self.services.get_service(id)?)
    }

    pub fn list_services(&self) -> ServiceResult<Vec<PublicService>> {
        Ok(self.services.list_services()?)
    }

    pub fn update_service(
        &self,
        id: EntityId,
        patch: &PublicServicePatch,
    ) -> ServiceResult<Option<PublicService>> {
        patch.validate()?;
        Ok(self.services.update_service(id, patch)?)
    }

    pub fn delete_service(&self, id: EntityId) -> ServiceResult<bool> {
        Ok(self.services.delete_service(id)?)
    }
}

//! Document repository use-case service: documents and their categories.
//!
//! # Invariants
//! - `documents_count` on categories is stored as supplied by editors;
//!   this service never recomputes it from the document set.
//! - Deleting a category leaves documents referencing its name untouched.

use crate::model::document::{
    Document, DocumentCategory, DocumentCategoryPatch, DocumentPatch, NewDocument,
    NewDocumentCategory,
};
use crate::model::EntityId;
use crate::repo::document_repo::{DocumentCategoryRepository, DocumentRepository};
use crate::service::ServiceResult;

/// Documents facade over the document and category repositories.
pub struct DocumentService<D, C>
where
    D: DocumentRepository,
    C: DocumentCategoryRepository,
{
    documents: D,
    categories: C,
}

impl<D, C> DocumentService<D, C>
where
    D: DocumentRepository,
    C: DocumentCategoryRepository,
{
    pub fn new(documents: D, categories: C) -> Self {
        Self {
            documents,
            categories,
        }
    }

    // Documents

    pub fn create_document(&self, input: &NewDocument) -> ServiceResult<Document> {
        input.validate()?;
        Ok(self.documents.create_document(input)?)
    }

    pub fn get_document(&self, id: EntityId) -> ServiceResult<Option<Document>> {
        Ok(self.documents.get_document(id)?)
    }

    pub fn list_documents(&self) -> ServiceResult<Vec<Document>> {
        Ok(self.documents.list_documents()?)
    }

    pub fn list_latest_documents(&self, limit: u32) -> ServiceResult<Vec<Document>> {
        Ok(self.documents.list_latest_documents(limit)?)
    }

    pub fn list_documents_by_category(&self, category: &str) -> ServiceResult<Vec<Document>> {
        Ok(self.documents.list_documents_by_category(category)?)
    }

    pub fn update_document(
        &self,
        id: EntityId,
        patch: &DocumentPatch,
    ) -> ServiceResult<Option<Document>> {
        patch.validate()?;
        Ok(self.documents.update_document(id, patch)?)
    }

    pub fn delete_document(&self, id: EntityId) -> ServiceResult<bool> {
        Ok(self.documents.delete_document(id)?)
    }

    // Categories

    pub fn create_category(&self, input: &NewDocumentCategory) -> ServiceResult<DocumentCategory> {
        input.validate()?;
        Ok(self.categories.create_category(input)?)
    }

    pub fn get_category(&self, id: EntityId) -> ServiceResult<Option<DocumentCategory>> {
        Ok(self.categories.get_category(id)?)
    }

    pub fn list_categories(&self) -> ServiceResult<Vec<DocumentCategory>> {
        Ok(self.categories.list_categories()?)
    }

    pub fn update_category(
        &self,
        id: EntityId,
        patch: &DocumentCategoryPatch,
    ) -> ServiceResult<Option<DocumentCategory>> {
        patch.validate()?;
        Ok(self.categories.update_category(id, patch)?)
    }

    pub fn delete_category(&self, id: EntityId) -> ServiceResult<bool> {
        Ok(self.categories.delete_category(id)?)
    }
}

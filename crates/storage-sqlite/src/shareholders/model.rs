//! Database models for shareholders.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::utils::now;
use dealership_core::shareholders::{NewShareholder, Shareholder, ShareholderUpdate};

/// Database model for shareholders
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::shareholders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ShareholderDB {
    pub id: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::shareholders)]
#[diesel(treat_none_as_null = true)]
pub struct ShareholderChangesDB {
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl ShareholderDB {
    pub fn from_new(id: String, new_shareholder: NewShareholder) -> Self {
        let timestamp = now();
        Self {
            id,
            full_name: new_shareholder.full_name,
            phone: new_shareholder.phone,
            email: new_shareholder.email,
            notes: new_shareholder.notes,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        }
    }
}

impl From<ShareholderUpdate> for ShareholderChangesDB {
    fn from(update: ShareholderUpdate) -> Self {
        Self {
            full_name: update.full_name,
            phone: update.phone,
            email: update.email,
            notes: update.notes,
            updated_at: now(),
        }
    }
}

impl From<ShareholderDB> for Shareholder {
    fn from(db: ShareholderDB) -> Self {
        Self {
            id: db.id,
            full_name: db.full_name,
            phone: db.phone,
            email: db.email,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
            deleted_at: db.deleted_at,
        }
    }
}

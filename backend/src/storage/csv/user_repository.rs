use anyhow::{Context, Result};
use csv::StringRecord;
use shared::UserCredential;
use tracing::{debug, info};

use super::connection::CsvConnection;
use super::table_file::CsvTableFile;
use crate::storage::traits::UserStorage;

pub const USER_HEADER: &[&str] = &["Id", "Email", "Password"];

/// Account created together with a fresh user file
pub const BOOTSTRAP_LOGIN: &str = "admin";
pub const BOOTSTRAP_PASSWORD: &str = "admin";

/// CSV-based user repository backed by a single `users.csv`
#[derive(Debug, Clone)]
pub struct UserRepository {
    table: CsvTableFile,
}

impl UserRepository {
    /// Create a new CSV user repository
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            table: CsvTableFile::new(connection.users_file_path(), USER_HEADER),
        }
    }

    fn encode(user: &UserCredential) -> StringRecord {
        StringRecord::from(vec![
            user.id.to_string(),
            user.login.clone(),
            user.password.clone(),
        ])
    }

    fn decode(record: &StringRecord) -> Option<UserCredential> {
        if record.len() < 3 {
            return None;
        }

        Some(UserCredential {
            id: record[0].trim().parse().ok()?,
            login: record[1].to_string(),
            password: record[2].to_string(),
        })
    }
}

impl UserStorage for UserRepository {
    fn initialize(&self) -> Result<()> {
        let bootstrap = UserCredential {
            id: 1,
            login: BOOTSTRAP_LOGIN.to_string(),
            password: BOOTSTRAP_PASSWORD.to_string(),
        };

        let created = self
            .table
            .ensure_exists(&[Self::encode(&bootstrap)])
            .context("Failed to initialize the user file")?;
        if created {
            info!("Created user file with bootstrap account '{}'", BOOTSTRAP_LOGIN);
        }
        Ok(())
    }

    fn authenticate(&self, login: &str, password: &str) -> Result<bool> {
        let rows = self.table.read_rows().context("Failed to read the user file")?;

        let matched = rows
            .iter()
            .any(|row| row.len() >= 3 && &row[1] == login && &row[2] == password);

        debug!("Authentication for '{}': {}", login, if matched { "ok" } else { "rejected" });
        Ok(matched)
    }

    fn register(&self, login: &str, password: &str) -> Result<bool> {
        let rows = self.table.read_rows().context("Failed to read the user file")?;

        if rows.iter().any(|row| row.get(1) == Some(login)) {
            info!("Registration rejected, login '{}' already exists", login);
            return Ok(false);
        }

        let user = UserCredential {
            id: self.table.next_id()?,
            login: login.to_string(),
            password: password.to_string(),
        };
        self.table
            .append_row(&Self::encode(&user))
            .with_context(|| format!("Failed to register user {}", login))?;

        info!("Registered user '{}' with ID: {}", user.login, user.id);
        Ok(true)
    }

    fn list_users(&self) -> Result<Vec<UserCredential>> {
        let rows = self.table.read_rows().context("Failed to read the user file")?;
        Ok(rows.iter().filter_map(Self::decode).collect())
    }
}

// src/directory/model.rs

use serde::{Deserialize, Deserializer, Serialize};

/// Explicit `null` reads as the field's default, same as a missing key.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ContactEntry {
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Dropdown label: "name - title", or just "name" when the title is blank.
    pub fn label(&self) -> String {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => format!("{} - {}", self.name, t),
            _ => self.name.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contacts: Vec<ContactEntry>,
}

impl ClientEntry {
    /// Contacts eligible for the dropdown, keyed by their index in `contacts`.
    pub fn contact_options(&self) -> Vec<ContactOption> {
        self.contacts
            .iter()
            .enumerate()
            .filter(|(_, c)| c.has_name())
            .map(|(index, c)| ContactOption {
                index,
                label: c.label(),
            })
            .collect()
    }
}

/// One selectable entry of the contact dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactOption {
    /// Position in the owning client's `contacts` (not in the filtered list).
    pub index: usize,
    pub label: String,
}

/// Read-only client table. Entries are addressed by position, so the order
/// must not change once loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientDirectory {
    clients: Vec<ClientEntry>,
}

impl ClientDirectory {
    pub fn new(clients: Vec<ClientEntry>) -> Self {
        Self { clients }
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn client(&self, index: usize) -> Option<&ClientEntry> {
        self.clients.get(index)
    }

    pub fn contact(&self, client_index: usize, contact_index: usize) -> Option<&ContactEntry> {
        self.client(client_index)
            .and_then(|c| c.contacts.get(contact_index))
    }

    pub fn client_names(&self) -> impl Iterator<Item = (usize, &str)> {
        self.clients
            .iter()
            .enumerate()
            .map(|(i, c)| (i, c.name.as_str()))
    }
}

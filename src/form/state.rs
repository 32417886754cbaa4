// src/form/state.rs

use crate::directory::{ClientDirectory, ContactOption};
use crate::types::FEE_TYPES;

use super::phases::PhaseTable;
use super::rich_text::{PlainTextEditor, RichTextEditor};
use super::subconsultants::SubConsultantSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    ClientName,
    ClientTitle,
    FirmName,
    FirmAddress,
    FirmCityStateZip,
    ProjectName,
    Jurisdiction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorSlot {
    ProjectSummary,
    MechanicalSummary,
    PlumbingSummary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeItem {
    Schematic,
    DesignDevelopment,
    ConstructionDocuments,
    ConstructionAdministration,
}

impl ScopeItem {
    pub const ALL: [ScopeItem; 4] = [
        ScopeItem::Schematic,
        ScopeItem::DesignDevelopment,
        ScopeItem::ConstructionDocuments,
        ScopeItem::ConstructionAdministration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScopeItem::Schematic => "Schematic Design",
            ScopeItem::DesignDevelopment => "Design Development",
            ScopeItem::ConstructionDocuments => "Construction Documents",
            ScopeItem::ConstructionAdministration => "Construction Administration",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScopeSet {
    pub schematic: bool,
    pub dd: bool,
    pub cd: bool,
    pub ca: bool,
}

impl ScopeSet {
    pub fn flag_mut(&mut self, item: ScopeItem) -> &mut bool {
        match item {
            ScopeItem::Schematic => &mut self.schematic,
            ScopeItem::DesignDevelopment => &mut self.dd,
            ScopeItem::ConstructionDocuments => &mut self.cd,
            ScopeItem::ConstructionAdministration => &mut self.ca,
        }
    }

    pub fn get(&self, item: ScopeItem) -> bool {
        match item {
            ScopeItem::Schematic => self.schematic,
            ScopeItem::DesignDevelopment => self.dd,
            ScopeItem::ConstructionDocuments => self.cd,
            ScopeItem::ConstructionAdministration => self.ca,
        }
    }

    pub fn toggle(&mut self, item: ScopeItem) {
        let f = self.flag_mut(item);
        *f = !*f;
    }
}

/// Cascading client / contact dropdown state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientPicker {
    pub selected_client: Option<usize>,
    pub selected_contact: Option<usize>,
    pub contact_options: Vec<ContactOption>,
    pub contact_enabled: bool,
}

/// Everything the proposal form holds between generations.
pub struct ProposalForm<E: RichTextEditor = PlainTextEditor> {
    pub client_name: String,
    pub client_title: String,
    pub firm_name: String,
    pub firm_address: String,
    pub firm_city_state_zip: String,
    pub project_name: String,
    pub jurisdiction: String,
    pub fee_type: String,

    pub project_summary: E,
    pub mechanical_summary: E,
    pub plumbing_summary: E,

    pub phases: PhaseTable,
    pub subs: SubConsultantSet,
    pub scope: ScopeSet,
    pub picker: ClientPicker,
}

impl<E: RichTextEditor + Default> Default for ProposalForm<E> {
    fn default() -> Self {
        Self::with_editors(E::default(), E::default(), E::default())
    }
}

impl ProposalForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: RichTextEditor> ProposalForm<E> {
    pub fn with_editors(project: E, mechanical: E, plumbing: E) -> Self {
        Self {
            client_name: String::new(),
            client_title: String::new(),
            firm_name: String::new(),
            firm_address: String::new(),
            firm_city_state_zip: String::new(),
            project_name: String::new(),
            jurisdiction: String::new(),
            fee_type: FEE_TYPES[0].to_string(),
            project_summary: project,
            mechanical_summary: mechanical,
            plumbing_summary: plumbing,
            phases: PhaseTable::new(),
            subs: SubConsultantSet::default(),
            scope: ScopeSet::default(),
            picker: ClientPicker::default(),
        }
    }

    pub fn field(&self, field: TextField) -> &str {
        match field {
            TextField::ClientName => &self.client_name,
            TextField::ClientTitle => &self.client_title,
            TextField::FirmName => &self.firm_name,
            TextField::FirmAddress => &self.firm_address,
            TextField::FirmCityStateZip => &self.firm_city_state_zip,
            TextField::ProjectName => &self.project_name,
            TextField::Jurisdiction => &self.jurisdiction,
        }
    }

    pub fn field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::ClientName => &mut self.client_name,
            TextField::ClientTitle => &mut self.client_title,
            TextField::FirmName => &mut self.firm_name,
            TextField::FirmAddress => &mut self.firm_address,
            TextField::FirmCityStateZip => &mut self.firm_city_state_zip,
            TextField::ProjectName => &mut self.project_name,
            TextField::Jurisdiction => &mut self.jurisdiction,
        }
    }

    pub fn editor(&self, slot: EditorSlot) -> &E {
        match slot {
            EditorSlot::ProjectSummary => &self.project_summary,
            EditorSlot::MechanicalSummary => &self.mechanical_summary,
            EditorSlot::PlumbingSummary => &self.plumbing_summary,
        }
    }

    pub fn editor_mut(&mut self, slot: EditorSlot) -> &mut E {
        match slot {
            EditorSlot::ProjectSummary => &mut self.project_summary,
            EditorSlot::MechanicalSummary => &mut self.mechanical_summary,
            EditorSlot::PlumbingSummary => &mut self.plumbing_summary,
        }
    }

    /// Client dropdown changed. `None` (or an index the directory does not
    /// have) resets every dependent field and disables the contact list.
    pub fn select_client(&mut self, dir: &ClientDirectory, index: Option<usize>) {
        self.client_name.clear();
        self.client_title.clear();
        self.picker.selected_contact = None;

        let Some(client) = index.and_then(|i| dir.client(i)) else {
            self.picker = ClientPicker::default();
            self.firm_name.clear();
            self.firm_address.clear();
            self.firm_city_state_zip.clear();
            return;
        };

        self.firm_name = client.name.clone();
        self.firm_address = client.address1.clone().unwrap_or_default();
        self.firm_city_state_zip = client.address2.clone().unwrap_or_default();

        let options = client.contact_options();
        self.picker.selected_client = index;
        self.picker.contact_enabled = !options.is_empty();
        self.picker.contact_options = options;
    }

    /// Contact dropdown changed. `index` is the contact's position within the
    /// selected client. `None` is the blank entry and clears name and title
    /// only; firm fields are left alone.
    pub fn select_contact(&mut self, dir: &ClientDirectory, index: Option<usize>) {
        let Some(index) = index else {
            self.picker.selected_contact = None;
            self.client_name.clear();
            self.client_title.clear();
            return;
        };

        let Some(client_index) = self.picker.selected_client else {
            return;
        };

        let Some(contact) = dir.contact(client_index, index) else {
            return;
        };

        self.picker.selected_contact = Some(index);
        self.client_name = contact.name.clone();
        self.client_title = contact.title.clone().unwrap_or_default();
    }

    /// Back to a blank form. Editors are cleared in place.
    pub fn reset(&mut self) {
        for f in [
            TextField::ClientName,
            TextField::ClientTitle,
            TextField::FirmName,
            TextField::FirmAddress,
            TextField::FirmCityStateZip,
            TextField::ProjectName,
            TextField::Jurisdiction,
        ] {
            self.field_mut(f).clear();
        }
        self.fee_type = FEE_TYPES[0].to_string();
        self.project_summary.set_plain_text("");
        self.mechanical_summary.set_plain_text("");
        self.plumbing_summary.set_plain_text("");
        self.phases.clear();
        self.subs = SubConsultantSet::default();
        self.scope = ScopeSet::default();
        self.picker = ClientPicker::default();
    }
}

// src/form/autofill.rs

use super::rich_text::RichTextEditor;
use super::state::ProposalForm;

pub const SAMPLE_PROJECT_NAME: &str = "Medical Office Building Renovation";
pub const SAMPLE_JURISDICTION: &str = "HCAI, City of Sacramento";

pub const SAMPLE_PROJECT_SUMMARY: &str = "This project involves the renovation of an existing 15,000 square foot medical office building. The scope includes upgrading HVAC systems, modifying mechanical and plumbing systems to accommodate new tenant layouts, and ensuring compliance with current building codes and OSHPD requirements. The project will be completed in phases to maintain partial building occupancy during construction.";

pub const SAMPLE_MECHANICAL_SUMMARY: &str = "The mechanical scope includes replacement of the existing rooftop HVAC units with new high-efficiency units, modification of ductwork distribution to accommodate new floor plans, installation of new VAV boxes and controls, and integration with the building automation system. All work will comply with Title 24 energy efficiency requirements and ASHRAE standards.";

pub const SAMPLE_PLUMBING_SUMMARY: &str = "The plumbing scope includes relocation of fixtures to accommodate new exam rooms and offices, replacement of aging domestic water piping, installation of new medical gas systems, upgrade of the domestic water heater, and installation of low-flow fixtures to meet current water conservation requirements. All plumbing work will comply with California Plumbing Code and healthcare facility standards.";

/// Fill project fields with a worked example. Client, fee and checkbox
/// state is left as is.
pub fn autofill_project_info<E: RichTextEditor>(form: &mut ProposalForm<E>) {
    form.project_name = SAMPLE_PROJECT_NAME.to_string();
    form.jurisdiction = SAMPLE_JURISDICTION.to_string();
    form.project_summary.set_plain_text(SAMPLE_PROJECT_SUMMARY);
    form.mechanical_summary.set_plain_text(SAMPLE_MECHANICAL_SUMMARY);
    form.plumbing_summary.set_plain_text(SAMPLE_PLUMBING_SUMMARY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::record::build_record;

    #[test]
    fn autofill_enables_both_summaries() {
        let mut f = ProposalForm::new();
        f.client_name = "Jo Lee".into();
        autofill_project_info(&mut f);

        let r = build_record(&f, None, "d");
        assert_eq!(r.project_name, SAMPLE_PROJECT_NAME);
        assert_eq!(r.jurisdiction, SAMPLE_JURISDICTION);
        assert!(r.include_mechanical);
        assert!(r.include_plumbing);
        assert_eq!(r.mechanical_summary.len(), 1);
        assert_eq!(r.client_name, "Jo Lee");
    }
}

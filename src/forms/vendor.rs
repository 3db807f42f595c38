use super::{FormErrors, collect, required};
use serde::Deserialize;
use validator::Validate;

/// Vendor creation form.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct VendorForm {
    #[validate(custom(function = "required"))]
    pub name: String,
    #[validate(custom(function = "required"))]
    pub contact_info: String,
    #[validate(custom(function = "required"))]
    pub service_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVendor {
    pub name: String,
    pub contact_info: String,
    pub service_type: String,
}

impl VendorForm {
    pub fn clean(&self) -> Result<NewVendor, FormErrors> {
        collect(self.validate()).into_result(NewVendor {
            name: self.name.clone(),
            contact_info: self.contact_info.clone(),
            service_type: self.service_type.clone(),
        })
    }
}

//! Form models: field definitions, per-field state and captured data

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::prelude::*;
use crate::validation::{validate_value, CustomCheck, FieldState, Pattern};

/// The kind of control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Date,
    Select,
    Textarea,
    File,
    Hidden,
}

impl InputKind {
    /// `type` attribute for `<input>` controls.
    pub fn input_type(&self) -> &'static str {
        match self {
            InputKind::Text | InputKind::Select | InputKind::Textarea => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Date => "date",
            InputKind::File => "file",
            InputKind::Hidden => "hidden",
        }
    }
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
    /// Fixed value for hidden fields, kept across resets.
    pub default_value: &'static str,
    pub custom_check: Option<CustomCheck>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: InputKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            default_value: "",
            custom_check: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn with_default(mut self, value: &'static str) -> Self {
        self.default_value = value;
        self
    }

    pub const fn with_check(mut self, check: CustomCheck) -> Self {
        self.custom_check = Some(check);
        self
    }

    /// File inputs are never validated.
    pub fn is_validated_on_submit(&self) -> bool {
        self.kind != InputKind::File
    }

    /// Only visible required controls get live feedback on blur.
    pub fn is_validated_on_blur(&self) -> bool {
        self.required && !matches!(self.kind, InputKind::File | InputKind::Hidden)
    }

    pub fn validate(&self, value: &str) -> FieldState {
        validate_value(
            self.label,
            self.name,
            self.required,
            value,
            Pattern::for_field(self.name),
            self.custom_check,
        )
    }
}

/// Submitted values in form order.
///
/// Serializes as a JSON object whose keys keep the order of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for FormData {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone)]
struct FieldEntry {
    spec: FieldSpec,
    value: String,
    state: FieldState,
}

/// Values and validity for every field of one form.
#[derive(Debug, Clone)]
pub struct FormModel {
    fields: Vec<FieldEntry>,
}

impl FormModel {
    pub fn new(specs: &[FieldSpec]) -> Self {
        let fields = specs
            .iter()
            .map(|spec| FieldEntry {
                spec: *spec,
                value: spec.default_value.to_string(),
                state: FieldState::Valid,
            })
            .collect();
        Self { fields }
    }

    pub fn specs(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().map(|f| &f.spec)
    }

    /// Name of the first field, where focus returns after the modal closes.
    pub fn first_field(&self) -> Option<&'static str> {
        self.fields.first().map(|f| f.spec.name)
    }

    fn entry(&self, name: &str) -> Result<&FieldEntry> {
        self.fields
            .iter()
            .find(|f| f.spec.name == name)
            .ok_or_else(|| Error::unknown_field(name))
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut FieldEntry> {
        self.fields
            .iter_mut()
            .find(|f| f.spec.name == name)
            .ok_or_else(|| Error::unknown_field(name))
    }

    pub fn value(&self, name: &str) -> Result<&str> {
        Ok(self.entry(name)?.value.as_str())
    }

    pub fn state(&self, name: &str) -> Result<&FieldState> {
        Ok(&self.entry(name)?.state)
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.entry_mut(name)?.value = value.into();
        Ok(())
    }

    /// Re-check one field and store the outcome. Returns whether it is valid.
    pub fn validate_field(&mut self, name: &str) -> Result<bool> {
        let entry = self.entry_mut(name)?;
        entry.state = entry.spec.validate(&entry.value);
        trace!(field = name, valid = entry.state.is_valid(), "Field validated");
        Ok(entry.state.is_valid())
    }

    /// Blur handler: only validates fields that take live feedback.
    pub fn blur(&mut self, name: &str) -> Result<bool> {
        if self.entry(name)?.spec.is_validated_on_blur() {
            self.validate_field(name)
        } else {
            Ok(true)
        }
    }

    /// Validate every non-file field. Returns the names of invalid fields.
    pub fn validate_all(&mut self) -> Vec<String> {
        let mut invalid = Vec::new();
        for entry in self.fields.iter_mut() {
            if !entry.spec.is_validated_on_submit() {
                continue;
            }
            entry.state = entry.spec.validate(&entry.value);
            if !entry.state.is_valid() {
                invalid.push(entry.spec.name.to_string());
            }
        }
        invalid
    }

    /// Snapshot of every field value in form order.
    pub fn data(&self) -> FormData {
        let mut data = FormData::default();
        for entry in &self.fields {
            data.push(entry.spec.name, entry.value.clone());
        }
        data
    }

    /// Back to defaults, all fields valid.
    pub fn reset(&mut self) {
        for entry in self.fields.iter_mut() {
            entry.value = entry.spec.default_value.to_string();
            entry.state = FieldState::Valid;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECS: &[FieldSpec] = &[
        FieldSpec::new("full_name", "Full Name", InputKind::Text).required(),
        FieldSpec::new("email", "Email Address", InputKind::Email).required(),
        FieldSpec::new("notes", "Notes", InputKind::Textarea),
        FieldSpec::new("upload", "Upload", InputKind::File).required(),
        FieldSpec::new("source", "Source", InputKind::Hidden).with_default("website"),
    ];

    #[test]
    fn test_new_model_uses_defaults() {
        let model = FormModel::new(SPECS);
        assert_eq!(model.value("full_name").unwrap(), "");
        assert_eq!(model.value("source").unwrap(), "website");
        assert!(model.state("email").unwrap().is_valid());
        assert_eq!(model.first_field(), Some("full_name"));
    }

    #[test]
    fn test_unknown_field_is_error() {
        let mut model = FormModel::new(SPECS);
        assert!(matches!(
            model.set_value("nope", "x"),
            Err(Error::UnknownField { .. })
        ));
        assert!(model.value("nope").is_err());
    }

    #[test]
    fn test_validate_all_skips_file_inputs() {
        let mut model = FormModel::new(SPECS);
        let invalid = model.validate_all();
        assert_eq!(invalid, vec!["full_name".to_string(), "email".to_string()]);
        assert!(model.state("upload").unwrap().is_valid());
    }

    #[test]
    fn test_blur_only_validates_required_visible_fields() {
        let mut model = FormModel::new(SPECS);
        assert!(!model.blur("full_name").unwrap());
        assert!(model.blur("upload").unwrap());
        assert!(model.state("upload").unwrap().is_valid());
        assert!(model.blur("notes").unwrap());
    }

    #[test]
    fn test_blur_uses_field_pattern() {
        let mut model = FormModel::new(SPECS);
        model.set_value("email", "abc@").unwrap();
        assert!(!model.blur("email").unwrap());
        assert_eq!(
            model.state("email").unwrap().message(),
            "Please enter a valid email format."
        );

        model.set_value("email", "abc@example.com").unwrap();
        assert!(model.blur("email").unwrap());
        assert_eq!(model.state("email").unwrap().message(), "");
    }

    #[test]
    fn test_reset_restores_defaults_and_validity() {
        let mut model = FormModel::new(SPECS);
        model.set_value("full_name", "Jane").unwrap();
        model.set_value("source", "tampered").unwrap();
        model.validate_all();
        model.reset();
        assert_eq!(model.value("full_name").unwrap(), "");
        assert_eq!(model.value("source").unwrap(), "website");
        assert!(model.state("email").unwrap().is_valid());
    }

    #[test]
    fn test_form_data_keeps_field_order_in_json() {
        let mut data = FormData::default();
        data.push("zeta", "1");
        data.push("alpha", "2");
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"zeta":"1","alpha":"2"}"#);
    }

    #[test]
    fn test_form_data_pretty_json() {
        let mut data = FormData::default();
        data.push("name", "Jane");
        assert_eq!(data.to_json_pretty().unwrap(), "{\n  \"name\": \"Jane\"\n}");
        assert_eq!(data.get("name"), Some("Jane"));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_input_kind_types() {
        assert_eq!(InputKind::Email.input_type(), "email");
        assert_eq!(InputKind::Hidden.input_type(), "hidden");
        assert_eq!(InputKind::File.input_type(), "file");
    }
}

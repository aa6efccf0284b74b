use super::{FormError, require};
use crate::config::ConsoleConfig;
use crate::import::{ImportFormat, ingest_bytes};
use crate::model::table::Table;
use crate::requests::CreateContactRequest;

/// The "Add Contact" form: a name, a description and an imported table.
///
/// Reading a file is asynchronous in the console, so every
/// [`ContactForm::select_file`] hands out a read ticket and
/// [`ContactForm::load_file`] only accepts bytes for the current one. A read
/// that finishes after the form was reset or another file was chosen is
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub description: String,
    pub format: ImportFormat,
    pub table: Option<Table>,
    file: Option<SelectedFile>,
    reads: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SelectedFile {
    ticket: u64,
    name: String,
    bytes: Option<Vec<u8>>,
}

impl ContactForm {
    /// Rejects files over the configured size before they are read.
    pub fn check_file_size(config: &ConsoleConfig, size: u64) -> Result<(), FormError> {
        if config.accepts_file_size(size) {
            Ok(())
        } else {
            Err(FormError::FileTooLarge {
                limit: config.max_import_bytes,
            })
        }
    }

    /// Starts reading a new file and returns its ticket. Any table from a
    /// previous file is dropped.
    pub fn select_file(&mut self, name: impl Into<String>) -> u64 {
        self.reads += 1;
        self.table = None;
        self.file = Some(SelectedFile {
            ticket: self.reads,
            name: name.into(),
            bytes: None,
        });
        self.reads
    }

    /// Ingests the bytes read for `ticket`. Returns `false`, leaving the form
    /// untouched, when the ticket is no longer current.
    pub fn load_file(&mut self, ticket: u64, bytes: Vec<u8>) -> bool {
        let format = self.format;
        match self.file.as_mut() {
            Some(file) if file.ticket == ticket => {
                self.table = Some(ingest_bytes(&bytes, format));
                file.bytes = Some(bytes);
                true
            }
            _ => false,
        }
    }

    /// Switches the import format, re-reading the current file if any.
    pub fn set_format(&mut self, format: ImportFormat) {
        self.format = format;
        if let Some(bytes) = self.file.as_ref().and_then(|f| f.bytes.as_ref()) {
            self.table = Some(ingest_bytes(bytes, format));
        }
    }

    /// True while `ticket` belongs to the file the form is waiting for.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.file.as_ref().is_some_and(|f| f.ticket == ticket)
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.name.as_str())
    }

    /// Clears every field. Reads still in flight become stale.
    pub fn reset(&mut self) {
        *self = Self {
            reads: self.reads,
            ..Self::default()
        };
    }

    pub fn validate(&self) -> Result<CreateContactRequest, Vec<FormError>> {
        let mut errors = Vec::new();
        require(&self.name, "Name", &mut errors);
        require(&self.description, "Description", &mut errors);
        let table = self.table.as_ref().filter(|t| !t.is_blank());
        if table.is_none() {
            errors.push(FormError::Required("Contact file"));
        }
        match table {
            Some(table) if errors.is_empty() => {
                CreateContactRequest::new(&self.name, &self.description, table)
                    .map_err(|e| vec![FormError::Encoding(e.to_string())])
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn requires_name_description_and_file() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FormError::Required("Name"),
                FormError::Required("Description"),
                FormError::Required("Contact file"),
            ]
        );
    }

    #[test]
    fn empty_file_counts_as_missing() {
        let mut form = ContactForm {
            name: "VIP".into(),
            description: "d".into(),
            ..ContactForm::default()
        };
        let ticket = form.select_file("empty.csv");
        assert!(form.load_file(ticket, Vec::new()));
        assert_eq!(form.validate().unwrap_err(), vec![FormError::Required("Contact file")]);
    }

    #[test]
    fn loaded_file_becomes_request() {
        let mut form = ContactForm {
            name: "VIP".into(),
            description: "d".into(),
            ..ContactForm::default()
        };
        let ticket = form.select_file("vip.csv");
        form.load_file(ticket, b"Name,Phone\nAda,1".to_vec());
        let request = form.validate().unwrap();
        assert_eq!(request.header, r#"["name","phone"]"#);
    }

    #[test]
    fn quoted_format_is_honoured_when_loading() {
        let mut form = ContactForm {
            format: ImportFormat::Quoted,
            ..ContactForm::default()
        };
        let ticket = form.select_file("names.csv");
        form.load_file(ticket, b"Name\n\"Lovelace, Ada\"".to_vec());
        assert_eq!(
            form.table.unwrap().rows,
            vec![vec!["Lovelace, Ada".to_string()]]
        );
    }

    #[test]
    fn toggling_format_rereads_current_file() {
        let mut form = ContactForm::default();
        let ticket = form.select_file("names.csv");
        form.load_file(ticket, b"Name\n\"Lovelace, Ada\"".to_vec());
        assert_eq!(form.table.as_ref().unwrap().rows[0].len(), 2);

        form.set_format(ImportFormat::Quoted);
        assert_eq!(
            form.table.unwrap().rows,
            vec![vec!["Lovelace, Ada".to_string()]]
        );
    }

    #[test]
    fn read_finishing_after_reset_is_dropped() {
        let mut form = ContactForm::default();
        let ticket = form.select_file("vip.csv");
        form.reset();

        assert!(!form.is_current(ticket));
        assert!(!form.load_file(ticket, b"Name\nAda".to_vec()));
        assert_eq!(form.table, None);
        assert_eq!(form.file_name(), None);
    }

    #[test]
    fn read_of_replaced_file_is_dropped() {
        let mut form = ContactForm::default();
        let first = form.select_file("old.csv");
        let second = form.select_file("new.csv");

        assert!(!form.load_file(first, b"Old\n1".to_vec()));
        assert!(form.load_file(second, b"New\n2".to_vec()));
        assert_eq!(form.table.unwrap().headers, vec!["new".to_string()]);
    }

    #[test]
    fn oversized_files_are_refused() {
        let config = ConsoleConfig {
            max_import_bytes: 4,
            ..ConsoleConfig::default()
        };
        assert!(ContactForm::check_file_size(&config, 4).is_ok());
        assert_eq!(
            ContactForm::check_file_size(&config, 5),
            Err(FormError::FileTooLarge { limit: 4 })
        );
    }
}

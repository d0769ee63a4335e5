//! # Localization
//!
//! Every piece of text the user sees is a [`Label`]. `Label::text` is one
//! exhaustive match per language, so adding a label without translating it
//! does not compile.
//!
//! The starting language comes from the host locale (`LC_ALL`, `LC_MESSAGES`,
//! `LANG`, first non-empty wins). Anything other than Polish falls back to
//! English.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pl,
    #[default]
    En,
}

impl Language {
    /// Language of the host environment, English if unsupported or unset.
    pub fn detect() -> Self {
        let locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty());
        locale
            .as_deref()
            .and_then(Self::from_locale)
            .unwrap_or_default()
    }

    /// Parse a POSIX-style locale (`pl_PL.UTF-8`, `en`, `C`) by its language prefix.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let code: String = locale.chars().take(2).collect::<String>().to_lowercase();
        match code.as_str() {
            "pl" => Some(Language::Pl),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Pl => Language::En,
            Language::En => Language::Pl,
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Pl => "Polski",
            Language::En => "English",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Title,
    ListChildren,
    UserSettings,
    Quit,
    BackToMenu,
    BackToList,
    LangLabel,
    LangToggle,
    AddChild,
    FirstName,
    LastName,
    BirthDate,
    Gender,
    Notes,
    Save,
    Cancel,
    ChildInfo,
    DeleteChild,
    EditNotes,
    ConfirmDelete,
    DeleteSuccess,
    ChildAdded,
    NotesUpdated,
    ChildMissing,
    BirthDateLabel,
    GenderLabel,
    NotesLabel,
    NoNotes,
    NotAvailable,
    NoChildren,
    MissingName,
    InvalidBirthDate,
    MissingAnswerField,
    HelpMenu,
    HelpList,
    HelpForm,
    HelpSettings,
    HelpDetail,
    HelpNotesEditor,
    HelpConfirm,
    ConsoleChooseOption,
    ConsoleAddChild,
    ConsoleListChildren,
    ConsoleDeleteChild,
    ConsoleQuit,
    ConsoleChoice,
    ConsoleInvalidChoice,
    ConsoleAskFirstName,
    ConsoleAskLastName,
    ConsoleAskBirthDate,
    ConsoleAskGender,
    ConsoleAskNotes,
    ConsoleAskId,
    ConsoleInvalidId,
    ConsoleChildrenHeader,
}

impl Label {
    pub const ALL: &'static [Label] = &[
        Label::Title,
        Label::ListChildren,
        Label::UserSettings,
        Label::Quit,
        Label::BackToMenu,
        Label::BackToList,
        Label::LangLabel,
        Label::LangToggle,
        Label::AddChild,
        Label::FirstName,
        Label::LastName,
        Label::BirthDate,
        Label::Gender,
        Label::Notes,
        Label::Save,
        Label::Cancel,
        Label::ChildInfo,
        Label::DeleteChild,
        Label::EditNotes,
        Label::ConfirmDelete,
        Label::DeleteSuccess,
        Label::ChildAdded,
        Label::NotesUpdated,
        Label::ChildMissing,
        Label::BirthDateLabel,
        Label::GenderLabel,
        Label::NotesLabel,
        Label::NoNotes,
        Label::NotAvailable,
        Label::NoChildren,
        Label::MissingName,
        Label::InvalidBirthDate,
        Label::MissingAnswerField,
        Label::HelpMenu,
        Label::HelpList,
        Label::HelpForm,
        Label::HelpSettings,
        Label::HelpDetail,
        Label::HelpNotesEditor,
        Label::HelpConfirm,
        Label::ConsoleChooseOption,
        Label::ConsoleAddChild,
        Label::ConsoleListChildren,
        Label::ConsoleDeleteChild,
        Label::ConsoleQuit,
        Label::ConsoleChoice,
        Label::ConsoleInvalidChoice,
        Label::ConsoleAskFirstName,
        Label::ConsoleAskLastName,
        Label::ConsoleAskBirthDate,
        Label::ConsoleAskGender,
        Label::ConsoleAskNotes,
        Label::ConsoleAskId,
        Label::ConsoleInvalidId,
        Label::ConsoleChildrenHeader,
    ];

    pub fn text(self, language: Language) -> &'static str {
        match language {
            Language::Pl => self.polish(),
            Language::En => self.english(),
        }
    }

    fn polish(self) -> &'static str {
        match self {
            Label::Title => "LogoApp",
            Label::ListChildren => "Lista dzieci",
            Label::UserSettings => "Ustawienia użytkownika",
            Label::Quit => "Zakończ",
            Label::BackToMenu => "Powrót do menu",
            Label::BackToList => "Powrót do listy",
            Label::LangLabel => "Język",
            Label::LangToggle => "English",
            Label::AddChild => "Dodaj dziecko",
            Label::FirstName => "Imię",
            Label::LastName => "Nazwisko",
            Label::BirthDate => "Data urodzenia",
            Label::Gender => "Płeć (M/K)",
            Label::Notes => "Notatki",
            Label::Save => "Zapisz",
            Label::Cancel => "Anuluj",
            Label::ChildInfo => "Szczegóły dziecka",
            Label::DeleteChild => "Usuń dziecko",
            Label::EditNotes => "Edytuj notatki",
            Label::ConfirmDelete => "Czy na pewno chcesz usunąć to dziecko?",
            Label::DeleteSuccess => "Dziecko zostało usunięte.",
            Label::ChildAdded => "Dziecko zostało dodane do bazy.",
            Label::NotesUpdated => "Notatki zostały zaktualizowane.",
            Label::ChildMissing => "Nie znaleziono dziecka.",
            Label::BirthDateLabel => "Data ur.:",
            Label::GenderLabel => "Płeć:",
            Label::NotesLabel => "Notatki:",
            Label::NoNotes => "(brak notatek)",
            Label::NotAvailable => "N/A",
            Label::NoChildren => "Brak dzieci w bazie.",
            Label::MissingName => "Brak imienia lub nazwiska.",
            Label::InvalidBirthDate => "Nieprawidłowa data urodzenia (DD.MM.RRRR).",
            Label::MissingAnswerField => "Brak pytania lub odpowiedzi.",
            Label::HelpMenu => " ↑↓ Wybierz  Enter Otwórz  Ctrl+C Wyjście ",
            Label::HelpList => " ↑↓ Wybierz  Enter Szczegóły  a Dodaj  Esc Menu ",
            Label::HelpForm => " Tab Następne pole  Ctrl+J Nowa linia  Enter Zapisz  Esc Anuluj ",
            Label::HelpSettings => " Enter Zmień język  Esc Menu ",
            Label::HelpDetail => " e Edytuj notatki  d Usuń  Esc Lista ",
            Label::HelpNotesEditor => " Ctrl+J Nowa linia  Enter Zapisz  Esc Anuluj ",
            Label::HelpConfirm => " t Tak  n Nie ",
            Label::ConsoleChooseOption => "Wybierz opcję:",
            Label::ConsoleAddChild => "1. Dodaj nowe dziecko",
            Label::ConsoleListChildren => "2. Pokaż wszystkie dzieci",
            Label::ConsoleDeleteChild => "3. Usuń dziecko po ID",
            Label::ConsoleQuit => "q. Zakończ",
            Label::ConsoleChoice => "Wybór: ",
            Label::ConsoleInvalidChoice => "Nieprawidłowy wybór!",
            Label::ConsoleAskFirstName => "Podaj imię dziecka: ",
            Label::ConsoleAskLastName => "Podaj nazwisko dziecka: ",
            Label::ConsoleAskBirthDate => "Podaj datę urodzenia dziecka (DD.MM.RRRR): ",
            Label::ConsoleAskGender => "Podaj płeć dziecka (M/K): ",
            Label::ConsoleAskNotes => "Podaj notatki o dziecku: ",
            Label::ConsoleAskId => "Podaj ID dziecka do usunięcia: ",
            Label::ConsoleInvalidId => "Nieprawidłowe ID.",
            Label::ConsoleChildrenHeader => "Lista dzieci w bazie:",
        }
    }

    fn english(self) -> &'static str {
        match self {
            Label::Title => "LogoApp",
            Label::ListChildren => "Children list",
            Label::UserSettings => "User settings",
            Label::Quit => "Quit",
            Label::BackToMenu => "Back to menu",
            Label::BackToList => "Back to list",
            Label::LangLabel => "Language",
            Label::LangToggle => "Polski",
            Label::AddChild => "Add child",
            Label::FirstName => "First name",
            Label::LastName => "Last name",
            Label::BirthDate => "Birth date",
            Label::Gender => "Gender (M/F)",
            Label::Notes => "Notes",
            Label::Save => "Save",
            Label::Cancel => "Cancel",
            Label::ChildInfo => "Child details",
            Label::DeleteChild => "Delete child",
            Label::EditNotes => "Edit notes",
            Label::ConfirmDelete => "Are you sure you want to delete this child?",
            Label::DeleteSuccess => "Child has been deleted.",
            Label::ChildAdded => "Child has been added.",
            Label::NotesUpdated => "Notes have been updated.",
            Label::ChildMissing => "Child not found.",
            Label::BirthDateLabel => "Birth date:",
            Label::GenderLabel => "Gender:",
            Label::NotesLabel => "Notes:",
            Label::NoNotes => "(no notes)",
            Label::NotAvailable => "N/A",
            Label::NoChildren => "No children in the database.",
            Label::MissingName => "First and last name are required.",
            Label::InvalidBirthDate => "Invalid birth date (DD.MM.YYYY).",
            Label::MissingAnswerField => "Question and answer are required.",
            Label::HelpMenu => " ↑↓ Select  Enter Open  Ctrl+C Quit ",
            Label::HelpList => " ↑↓ Select  Enter Details  a Add  Esc Menu ",
            Label::HelpForm => " Tab Next field  Ctrl+J New line  Enter Save  Esc Cancel ",
            Label::HelpSettings => " Enter Switch language  Esc Menu ",
            Label::HelpDetail => " e Edit notes  d Delete  Esc List ",
            Label::HelpNotesEditor => " Ctrl+J New line  Enter Save  Esc Cancel ",
            Label::HelpConfirm => " y Yes  n No ",
            Label::ConsoleChooseOption => "Choose an option:",
            Label::ConsoleAddChild => "1. Add a new child",
            Label::ConsoleListChildren => "2. Show all children",
            Label::ConsoleDeleteChild => "3. Delete a child by ID",
            Label::ConsoleQuit => "q. Quit",
            Label::ConsoleChoice => "Choice: ",
            Label::ConsoleInvalidChoice => "Invalid choice!",
            Label::ConsoleAskFirstName => "Child's first name: ",
            Label::ConsoleAskLastName => "Child's last name: ",
            Label::ConsoleAskBirthDate => "Child's birth date (DD.MM.YYYY): ",
            Label::ConsoleAskGender => "Child's gender (M/F): ",
            Label::ConsoleAskNotes => "Notes about the child: ",
            Label::ConsoleAskId => "ID of the child to delete: ",
            Label::ConsoleInvalidId => "Invalid ID.",
            Label::ConsoleChildrenHeader => "Children in the database:",
        }
    }
}

/// Key that confirms a yes/no prompt in the given language.
pub fn confirm_key(language: Language) -> char {
    match language {
        Language::Pl => 't',
        Language::En => 'y',
    }
}

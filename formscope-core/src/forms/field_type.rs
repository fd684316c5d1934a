//! Field classification and flags according to ISO 32000-1 Section 12.7.3/12.7.4

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Field flags (`/Ff`) according to ISO 32000-1 Tables 221, 226, 228 and 230.
    ///
    /// Bits above the common three mean different things per field type; use
    /// [`FieldFlags::names_for`] to decode them for a given [`FieldKind`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u32 {
        const READ_ONLY = 1 << 0;
        const REQUIRED = 1 << 1;
        const NO_EXPORT = 1 << 2;
        // Text fields
        const MULTILINE = 1 << 12;
        const PASSWORD = 1 << 13;
        const FILE_SELECT = 1 << 20;
        const DO_NOT_SCROLL = 1 << 23;
        const COMB = 1 << 24;
        // Button fields
        const NO_TOGGLE_TO_OFF = 1 << 14;
        const RADIO = 1 << 15;
        const PUSHBUTTON = 1 << 16;
        const RADIOS_IN_UNISON = 1 << 25;
        // Choice fields
        const COMBO = 1 << 17;
        const EDIT = 1 << 18;
        const SORT = 1 << 19;
        const MULTI_SELECT = 1 << 21;
        const COMMIT_ON_SEL_CHANGE = 1 << 26;
        // Text and choice fields
        const DO_NOT_SPELL_CHECK = 1 << 22;
    }
}

const COMMON_FLAGS: &[(FieldFlags, &str)] = &[
    (FieldFlags::READ_ONLY, "ReadOnly"),
    (FieldFlags::REQUIRED, "Required"),
    (FieldFlags::NO_EXPORT, "NoExport"),
];

const BUTTON_FLAGS: &[(FieldFlags, &str)] = &[
    (FieldFlags::NO_TOGGLE_TO_OFF, "NoToggleToOff"),
    (FieldFlags::RADIO, "Radio"),
    (FieldFlags::PUSHBUTTON, "Pushbutton"),
    (FieldFlags::RADIOS_IN_UNISON, "RadiosInUnison"),
];

const TEXT_FLAGS: &[(FieldFlags, &str)] = &[
    (FieldFlags::MULTILINE, "Multiline"),
    (FieldFlags::PASSWORD, "Password"),
    (FieldFlags::FILE_SELECT, "FileSelect"),
    (FieldFlags::DO_NOT_SPELL_CHECK, "DoNotSpellCheck"),
    (FieldFlags::DO_NOT_SCROLL, "DoNotScroll"),
    (FieldFlags::COMB, "Comb"),
    // Same bit as RadiosInUnison
    (FieldFlags::RADIOS_IN_UNISON, "RichText"),
];

const CHOICE_FLAGS: &[(FieldFlags, &str)] = &[
    (FieldFlags::COMBO, "Combo"),
    (FieldFlags::EDIT, "Edit"),
    (FieldFlags::SORT, "Sort"),
    (FieldFlags::MULTI_SELECT, "MultiSelect"),
    (FieldFlags::DO_NOT_SPELL_CHECK, "DoNotSpellCheck"),
    (FieldFlags::COMMIT_ON_SEL_CHANGE, "CommitOnSelChange"),
];

impl FieldFlags {
    /// Interpret a raw `/Ff` integer, keeping bits with no named flag.
    pub fn from_raw(raw: i64) -> Self {
        // /Ff is a 32-bit field; negative values are the sign-extended form
        FieldFlags::from_bits_retain(raw as u32)
    }

    /// Names of the set flags, as meaningful for a field of `kind`.
    pub fn names_for(&self, kind: FieldKind) -> Vec<&'static str> {
        let specific: &[(FieldFlags, &str)] = match kind {
            FieldKind::CheckBox | FieldKind::RadioButton | FieldKind::PushButton => BUTTON_FLAGS,
            FieldKind::Text => TEXT_FLAGS,
            FieldKind::ComboBox | FieldKind::ListBox => CHOICE_FLAGS,
            FieldKind::Signature | FieldKind::Unknown => &[],
        };

        COMMON_FLAGS
            .iter()
            .chain(specific)
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

/// Concrete kind of a form field, derived from `/FT` and `/Ff`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Button field toggling between an on state and `/Off`
    CheckBox,
    /// Button field with the Radio flag
    RadioButton,
    /// Button field with the Pushbutton flag
    PushButton,
    /// Text field
    Text,
    /// Choice field with the Combo flag
    ComboBox,
    /// Choice field without the Combo flag
    ListBox,
    /// Signature field
    Signature,
    /// Missing or unrecognised `/FT`
    Unknown,
}

impl FieldKind {
    /// Classify a field from its `/FT` name (without the leading solidus)
    /// and its flags.
    pub fn classify(field_type: Option<&[u8]>, flags: FieldFlags) -> Self {
        match field_type {
            Some(b"Btn") if flags.contains(FieldFlags::PUSHBUTTON) => FieldKind::PushButton,
            Some(b"Btn") if flags.contains(FieldFlags::RADIO) => FieldKind::RadioButton,
            Some(b"Btn") => FieldKind::CheckBox,
            Some(b"Tx") => FieldKind::Text,
            Some(b"Ch") if flags.contains(FieldFlags::COMBO) => FieldKind::ComboBox,
            Some(b"Ch") => FieldKind::ListBox,
            Some(b"Sig") => FieldKind::Signature,
            _ => FieldKind::Unknown,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::CheckBox => "CheckBox",
            FieldKind::RadioButton => "RadioButton",
            FieldKind::PushButton => "PushButton",
            FieldKind::Text => "TextField",
            FieldKind::ComboBox => "ComboBox",
            FieldKind::ListBox => "ListBox",
            FieldKind::Signature => "Signature",
            FieldKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

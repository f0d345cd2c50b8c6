//! Unicode general category lookups used by the text transforms.

pub use unicode_general_category::GeneralCategory;
use unicode_general_category::get_general_category;

/// General category of `ch` from the Unicode character database.
#[inline]
pub fn category(ch: char) -> GeneralCategory {
    get_general_category(ch)
}

/// Whether `ch` is a space, line or paragraph separator.
#[inline]
pub fn is_separator(ch: char) -> bool {
    matches!(
        category(ch),
        GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Whether `ch` is a combining mark that occupies no space of its own.
#[inline]
pub fn is_nonspacing_mark(ch: char) -> bool {
    category(ch) == GeneralCategory::NonspacingMark
}

/// Long name of a general category, e.g. `"OpenPunctuation"`.
pub fn category_name(category: GeneralCategory) -> &'static str {
    use GeneralCategory::*;

    // GeneralCategory is #[non_exhaustive]; the wildcard covers future variants.
    #[allow(unreachable_patterns)]
    match category {
        UppercaseLetter => "UppercaseLetter",
        LowercaseLetter => "LowercaseLetter",
        TitlecaseLetter => "TitlecaseLetter",
        ModifierLetter => "ModifierLetter",
        OtherLetter => "OtherLetter",
        NonspacingMark => "NonSpacingMark",
        SpacingMark => "SpacingCombiningMark",
        EnclosingMark => "EnclosingMark",
        DecimalNumber => "DecimalDigitNumber",
        LetterNumber => "LetterNumber",
        OtherNumber => "OtherNumber",
        ConnectorPunctuation => "ConnectorPunctuation",
        DashPunctuation => "DashPunctuation",
        OpenPunctuation => "OpenPunctuation",
        ClosePunctuation => "ClosePunctuation",
        InitialPunctuation => "InitialQuotePunctuation",
        FinalPunctuation => "FinalQuotePunctuation",
        OtherPunctuation => "OtherPunctuation",
        MathSymbol => "MathSymbol",
        CurrencySymbol => "CurrencySymbol",
        ModifierSymbol => "ModifierSymbol",
        OtherSymbol => "OtherSymbol",
        SpaceSeparator => "SpaceSeparator",
        LineSeparator => "LineSeparator",
        ParagraphSeparator => "ParagraphSeparator",
        Control => "Control",
        Format => "Format",
        Surrogate => "Surrogate",
        PrivateUse => "PrivateUse",
        Unassigned => "OtherNotAssigned",
        _ => "OtherNotAssigned",
    }
}

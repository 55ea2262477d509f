use thiserror::Error;

/// Failures surfaced while turning raw user text into domain values.
///
/// The `Display` text of each variant is shown to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Names should only contain alphanumeric characters, spaces and the punctuation . , ' - / ( ), \
         should start with a letter or digit, and should not be blank."
    )]
    InvalidName,
    #[error(
        "Phone numbers should only contain digits, may optionally start with a '+', \
         and must be between 1 and 17 digits long."
    )]
    InvalidPhone,
    #[error(
        "Emails should be of the format local-part@domain: the local part is alphanumeric characters \
         optionally separated by one of + _ . -, and the domain is dot-separated labels of alphanumeric \
         characters and hyphens, ending in a label at least 2 characters long."
    )]
    InvalidEmail,
    #[error("Role should be either 'prof' or 'TA' (case-insensitive).")]
    InvalidRole,
    #[error("Telegram handle should only contain alphabets, digits, underscores or '@'.")]
    InvalidTelegram,
    #[error("Unknown module code: {0}. Use a module code from the module registry.")]
    UnknownModule(String),
    #[error("No modules supplied: at least one module code is required.")]
    NoModules,
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,
    #[error("Duplicate index found: {0}. Each index may only be given once.")]
    DuplicateIndex(String),
    #[error(
        "Phone keywords should only contain digits, may optionally start with a '+', \
         and must be between 1 and 17 digits long."
    )]
    InvalidPhoneKeyword,
    #[error("Email keyword cannot be empty.")]
    EmptyEmailKeyword,
    #[error("Module keyword cannot be empty.")]
    EmptyModuleKeyword,
    #[error("Module keywords must contain only alphanumeric characters.")]
    InvalidModuleKeyword,
    #[error("Telegram keyword cannot be empty.")]
    EmptyTelegramKeyword,
    #[error("Role search must contain exactly one keyword: 'prof' or 'TA' (case-insensitive).")]
    RoleKeywordCount,
    #[error("Favourite search must contain exactly one keyword: 'y' or 'n' (case-insensitive).")]
    FavouriteKeywordCount,
    #[error("Favourite search only accepts 'y' or 'n' (case-insensitive).")]
    InvalidFavouriteKeyword,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("invalid module code: {0:?}")]
    InvalidCode(String),
    #[error("duplicate module code: {0}")]
    DuplicateCode(String),
}

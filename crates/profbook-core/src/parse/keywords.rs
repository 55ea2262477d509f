use crate::domain::{is_phone_digits, Name, Role, Telegram};
use crate::error::ParseError;

// Search keywords only need to be structurally plausible; they are not full
// field values.

pub fn validate_name_keywords(keywords: &[String]) -> Result<(), ParseError> {
    for keyword in keywords {
        if !Name::is_valid(keyword) {
            return Err(ParseError::InvalidName);
        }
    }
    Ok(())
}

pub fn validate_phone_keywords(keywords: &[String]) -> Result<(), ParseError> {
    for keyword in keywords {
        if !is_phone_digits(keyword) {
            return Err(ParseError::InvalidPhoneKeyword);
        }
    }
    Ok(())
}

pub fn validate_email_keywords(keywords: &[String]) -> Result<(), ParseError> {
    for keyword in keywords {
        if keyword.trim().is_empty() {
            return Err(ParseError::EmptyEmailKeyword);
        }
    }
    Ok(())
}

pub fn validate_module_keywords(keywords: &[String]) -> Result<(), ParseError> {
    for keyword in keywords {
        if keyword.trim().is_empty() {
            return Err(ParseError::EmptyModuleKeyword);
        }
        if !keyword.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(ParseError::InvalidModuleKeyword);
        }
    }
    Ok(())
}

pub fn validate_telegram_keywords(keywords: &[String]) -> Result<(), ParseError> {
    for keyword in keywords {
        if keyword.trim().is_empty() {
            return Err(ParseError::EmptyTelegramKeyword);
        }
        if !Telegram::is_valid(keyword) {
            return Err(ParseError::InvalidTelegram);
        }
    }
    Ok(())
}

pub fn validate_role_keywords(keywords: &[String]) -> Result<(), ParseError> {
    let [keyword] = keywords else {
        return Err(ParseError::RoleKeywordCount);
    };
    if !Role::is_valid(keyword) {
        return Err(ParseError::InvalidRole);
    }
    Ok(())
}

pub fn validate_favourite_keywords(keywords: &[String]) -> Result<(), ParseError> {
    let [keyword] = keywords else {
        return Err(ParseError::FavouriteKeywordCount);
    };
    if parse_favourite_keyword(keyword).is_none() {
        return Err(ParseError::InvalidFavouriteKeyword);
    }
    Ok(())
}

/// `y` means favourite, `n` means not; anything else is not a favourite keyword.
pub(crate) fn parse_favourite_keyword(keyword: &str) -> Option<bool> {
    if keyword.eq_ignore_ascii_case("y") {
        Some(true)
    } else if keyword.eq_ignore_ascii_case("n") {
        Some(false)
    } else {
        None
    }
}

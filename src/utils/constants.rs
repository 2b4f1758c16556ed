/// Local storage keys shared with the static portal pages
pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const RECENT_SUBJECTS_KEY: &str = "recentSubjects";

/// Subject page opened from a dashboard card
pub const ROADMAP_PAGE: &str = "Roadmap.html";

/// Upload limits for profile pictures
pub const ALLOWED_PICTURE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// The server answers uploads with this prefix before the stored filename
pub const UPLOAD_REPLY_PREFIX: &str = "Profile picture uploaded: ";

/// Cards visible before "View More"
pub const VISIBLE_CARDS: usize = 3;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const STRONG_PASSWORD_LEN: usize = 8;
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

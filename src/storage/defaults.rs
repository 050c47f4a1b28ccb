//! Built-in profile used when no data file exists yet.

use crate::storage::types::Profile;

pub const DEFAULT_SKILLS: [&str; 7] = [
    "C",
    "C#",
    "Python",
    "JavaScript",
    "Operating System & Linux Administration",
    "Networking",
    "Ethical Hacking & Cybersecurity",
];

pub const DEFAULT_INTERESTS: [&str; 5] = [
    "Developing secure and efficient applications",
    "Linux automation scripts",
    "Exploring network security",
    "Ethical hacking techniques",
    "Interest in Learning new technology",
];

pub const DEFAULT_LEARNING: [&str; 3] = [
    "Advanced C# patterns",
    "Network security & penetration testing",
    "Cloud integration and DevOps",
];

pub const DEFAULT_GITHUB_URL: &str = "https://github.com/Dipesh-12345";
pub const DEFAULT_FACEBOOK_URL: &str = "https://www.facebook.com/james.rubby.464720";
pub const DEFAULT_TRYHACKME_URL: &str = "https://tryhackme.com/p/Toraxa";

/// Build the default profile.
pub fn default_profile() -> Profile {
    Profile {
        skills: to_strings(&DEFAULT_SKILLS),
        interests: to_strings(&DEFAULT_INTERESTS),
        learning: to_strings(&DEFAULT_LEARNING),
        github_url: DEFAULT_GITHUB_URL.into(),
        facebook_url: DEFAULT_FACEBOOK_URL.into(),
        tryhackme_url: DEFAULT_TRYHACKME_URL.into(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

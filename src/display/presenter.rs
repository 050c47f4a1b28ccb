//! Typewriter-style rendering of the profile.
//!
//! Output goes to any [`Write`] so the exact text can be captured in tests.
//! Colors are optional decoration; turning them off never changes the text.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::config::{Pacing, Settings};
use crate::display::banner::{BANNER_INTRO, BANNER_WELCOME};
use crate::error::Result;
use crate::storage::{ListField, Profile};

pub const FOOTER: &str = "=======================";
pub const CONTACT_HEADER: &str = "📫 Connect with me:";

/// A labeled, colored list section.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub field: ListField,
    pub color: Color,
}

/// Sections in display order.
pub const SECTIONS: [Section; 3] = [
    Section {
        title: "Skills & Expertise:",
        field: ListField::Skills,
        color: Color::Yellow,
    },
    Section {
        title: "Interests:",
        field: ListField::Interests,
        color: Color::Green,
    },
    Section {
        title: "Currently Learning:",
        field: ListField::Learning,
        color: Color::Magenta,
    },
];

/// Renders a [`Profile`] to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    pacing: Pacing,
    color: bool,
}

impl Presenter {
    pub fn new(pacing: Pacing, color: bool) -> Self {
        Self { pacing, color }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.pacing, settings.color)
    }

    /// Clear the viewport, then render the whole profile.
    pub fn display<W: Write>(&self, out: &mut W, profile: &Profile) -> Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.render(out, profile)
    }

    /// Render without clearing: banner, sections, contacts, footer.
    pub fn render<W: Write>(&self, out: &mut W, profile: &Profile) -> Result<()> {
        self.print_banner(out)?;
        for section in SECTIONS {
            self.print_section(out, section, profile.list(section.field))?;
        }
        self.print_contacts(out, profile)?;
        self.print_footer(out)?;
        out.flush()?;
        Ok(())
    }

    fn print_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        self.set_color(out, Color::Cyan)?;
        typewrite(out, BANNER_INTRO, self.pacing.banner_primary)?;
        self.set_color(out, Color::Red)?;
        typewrite(out, BANNER_WELCOME, self.pacing.banner_secondary)?;
        self.reset_color(out)
    }

    fn print_section<W: Write>(
        &self,
        out: &mut W,
        section: Section,
        items: &[String],
    ) -> Result<()> {
        self.print_header(out, section.title, section.color)?;
        for item in items {
            writeln!(out, "- {}", item)?;
            out.flush()?;
            pause(self.pacing.item);
        }
        Ok(())
    }

    fn print_contacts<W: Write>(&self, out: &mut W, profile: &Profile) -> Result<()> {
        self.print_header(out, CONTACT_HEADER, Color::Cyan)?;
        writeln!(out, "- GitHub: {}", profile.github_url)?;
        writeln!(out, "- Facebook: {}", profile.facebook_url)?;
        writeln!(out, "- Tryhackme: {}", profile.tryhackme_url)?;
        Ok(())
    }

    fn print_footer<W: Write>(&self, out: &mut W) -> Result<()> {
        self.print_header(out, FOOTER, Color::Cyan)
    }

    /// Blank line, then `text` in `color`.
    fn print_header<W: Write>(&self, out: &mut W, text: &str, color: Color) -> Result<()> {
        self.set_color(out, color)?;
        write!(out, "\n{}", text)?;
        self.reset_color(out)?;
        writeln!(out)?;
        Ok(())
    }

    fn set_color<W: Write>(&self, out: &mut W, color: Color) -> Result<()> {
        if self.color {
            queue!(out, SetForegroundColor(color))?;
        }
        Ok(())
    }

    fn reset_color<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.color {
            queue!(out, ResetColor)?;
        }
        Ok(())
    }
}

/// Write `text` one character at a time, pausing `delay` after each.
pub fn typewrite<W: Write>(out: &mut W, text: &str, delay: Duration) -> Result<()> {
    if delay.is_zero() {
        out.write_all(text.as_bytes())?;
        return Ok(());
    }
    let mut buf = [0u8; 4];
    for c in text.chars() {
        out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        out.flush()?;
        thread::sleep(delay);
    }
    Ok(())
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::default_profile;
    use std::time::Instant;

    fn render_plain(profile: &Profile) -> String {
        let mut out = Vec::new();
        Presenter::new(Pacing::instant(), false)
            .render(&mut out, profile)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_exact_text() {
        let profile = Profile {
            skills: vec!["C".into(), "Rust".into()],
            interests: vec!["Security".into()],
            learning: vec![],
            github_url: "gh".into(),
            facebook_url: "".into(),
            tryhackme_url: "thm".into(),
        };
        let body = concat!(
            "\nSkills & Expertise:\n- C\n- Rust\n",
            "\nInterests:\n- Security\n",
            "\nCurrently Learning:\n",
            "\n📫 Connect with me:\n- GitHub: gh\n- Facebook: \n- Tryhackme: thm\n",
            "\n=======================\n",
        );
        let expected = format!("{}{}{}", BANNER_INTRO, BANNER_WELCOME, body);
        assert_eq!(render_plain(&profile), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let profile = default_profile();
        assert_eq!(render_plain(&profile), render_plain(&profile));
    }

    #[test]
    fn test_section_order() {
        let text = render_plain(&default_profile());
        let skills = text.find("Skills & Expertise:").unwrap();
        let interests = text.find("Interests:").unwrap();
        let learning = text.find("Currently Learning:").unwrap();
        let contacts = text.find(CONTACT_HEADER).unwrap();
        let footer = text.rfind(FOOTER).unwrap();
        assert!(skills < interests && interests < learning);
        assert!(learning < contacts && contacts < footer);
        assert!(text.contains("- Ethical Hacking & Cybersecurity\n"));
    }

    #[test]
    fn test_color_does_not_change_text() {
        let profile = default_profile();
        let mut colored = Vec::new();
        Presenter::new(Pacing::instant(), true)
            .render(&mut colored, &profile)
            .unwrap();
        let colored = String::from_utf8(colored).unwrap();
        assert!(colored.contains('\x1b'));

        let plain = render_plain(&profile);
        assert!(!plain.contains('\x1b'));
        assert_eq!(strip_ansi(&colored), plain);
    }

    #[test]
    fn test_display_clears_first() {
        let mut out = Vec::new();
        Presenter::new(Pacing::instant(), false)
            .display(&mut out, &default_profile())
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('\x1b'));
        assert!(text.ends_with(&format!("{}\n", FOOTER)));
    }

    #[test]
    fn test_typewrite_paces_output() {
        let mut out = Vec::new();
        let start = Instant::now();
        typewrite(&mut out, "abcd", Duration::from_millis(5)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert_eq!(out, b"abcd");
    }

    #[test]
    fn test_typewrite_multibyte() {
        let mut out = Vec::new();
        typewrite(&mut out, "📫é", Duration::from_nanos(1)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "📫é");
    }

    /// Drop CSI sequences (`ESC [ ... final-byte`).
    fn strip_ansi(s: &str) -> String {
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' && chars.peek() == Some(&'[') {
                chars.next();
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }
}

/*
sushi.rs

Copyright 2025 Hervé Quatremain

This file is part of Yuletide Arcade.

Yuletide Arcade is free software: you can redistribute it and/or modify it
under the terms of the GNU General Public License as published by the Free
Software Foundation, either version 3 of the License, or (at your option) any
later version.

Yuletide Arcade is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Yuletide Arcade. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Sushi adventure.
//!
//! The player is a sushi apprentice who builds a sushi roll from four decisions: the rice, the
//! filling, the topping, and the preparation style.
//! The resulting sushi is then drawn with colored ASCII art.

use formatx::formatx;
use gettextrs::gettext;
use log::debug;
use std::fmt;
use std::io::{self, BufRead, Write};
use strum_macros::FromRepr;

use crate::ansi::{Color, RESET};
use crate::madlib::read_line;

/// Options for one of the decisions.
///
/// The options are numbered from 1 when presented to the player.
pub trait Choice: Copy + fmt::Display {
    /// Number of options.
    const COUNT: usize;

    /// Return the option from its position in the list, starting at 0.
    fn from_index(index: usize) -> Option<Self>;
}

/// Hint displayed when the player does not enter a valid option number.
fn hint(count: usize) -> String {
    match count {
        2 => gettext("Please enter 1 or 2."),
        3 => gettext("Please enter 1, 2, or 3."),
        n => formatx!(gettext("Please enter a number between 1 and {count}."), count = n)
            .unwrap_or_else(|_| format!("Please enter a number between 1 and {n}.")),
    }
}

/// List of the option numbers, for the questions ("1 or 2", "1, 2, or 3"...).
fn choice_list(count: usize) -> String {
    match count {
        0 => String::new(),
        1 => "1".to_string(),
        2 => gettext("1 or 2"),
        n => {
            let first: Vec<String> = (1..n).map(|i| i.to_string()).collect();
            let first: String = first.join(", ");
            formatx!(gettext("{first}, or {last}"), first = &first, last = n)
                .unwrap_or_else(|_| format!("{first}, or {n}"))
        }
    }
}

/// Parse the player answer into an option.
///
/// The answer is the option number, starting at 1.
pub fn parse_choice<T: Choice>(answer: &str) -> Option<T> {
    let answer: &str = answer.trim();
    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let number: usize = answer.parse().ok()?;
    if number < 1 || number > T::COUNT {
        return None;
    }
    T::from_index(number - 1)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(usize)]
pub enum Rice {
    White,
    Brown,
    Black,
}

impl Rice {
    fn pattern(self) -> &'static str {
        match self {
            Rice::White => "ooo",
            Rice::Brown => "***",
            Rice::Black => "###",
        }
    }

    fn color(self) -> Color {
        match self {
            Rice::White => Color::Green,
            Rice::Brown => Color::Yellow,
            Rice::Black => Color::Red,
        }
    }
}

impl fmt::Display for Rice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rice::White => write!(f, "{}", gettext("White Rice")),
            Rice::Brown => write!(f, "{}", gettext("Brown Rice")),
            Rice::Black => write!(f, "{}", gettext("Black Rice")),
        }
    }
}

impl Choice for Rice {
    const COUNT: usize = 3;

    fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(usize)]
pub enum Filling {
    Salmon,
    Tuna,
    TempuraShrimp,
    Cucumber,
    Eel,
}

impl Filling {
    fn pattern(self) -> &'static str {
        match self {
            Filling::Salmon => "~~~",
            Filling::Tuna => "===",
            Filling::TempuraShrimp => "+++",
            Filling::Cucumber => "|||",
            Filling::Eel => "---",
        }
    }

    fn color(self) -> Color {
        match self {
            Filling::Salmon => Color::Orange,
            Filling::Tuna => Color::Red,
            Filling::TempuraShrimp => Color::Yellow,
            Filling::Cucumber => Color::Green,
            Filling::Eel => Color::BrightMagenta,
        }
    }
}

impl fmt::Display for Filling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Filling::Salmon => write!(f, "{}", gettext("Salmon")),
            Filling::Tuna => write!(f, "{}", gettext("Tuna")),
            Filling::TempuraShrimp => write!(f, "{}", gettext("Tempura Shrimp")),
            Filling::Cucumber => write!(f, "{}", gettext("Cucumber")),
            Filling::Eel => write!(f, "{}", gettext("Eel")),
        }
    }
}

impl Choice for Filling {
    const COUNT: usize = 5;

    fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(usize)]
pub enum Topping {
    Avocado,
    SpicyMayo,
    SesameSeeds,
    EelSauce,
    None,
}

impl Topping {
    /// Pattern for the ASCII art, or None for [`Topping::None`].
    fn pattern(self) -> Option<&'static str> {
        match self {
            Topping::Avocado => Some("..."),
            Topping::SpicyMayo => Some("***"),
            Topping::SesameSeeds => Some("^^^"),
            Topping::EelSauce => Some(":::"),
            Topping::None => None,
        }
    }

    fn color(self) -> Color {
        match self {
            Topping::Avocado => Color::Green,
            Topping::SpicyMayo => Color::Red,
            Topping::SesameSeeds => Color::Yellow,
            Topping::EelSauce => Color::Orange,
            Topping::None => Color::Plain,
        }
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Topping::Avocado => write!(f, "{}", gettext("Avocado")),
            Topping::SpicyMayo => write!(f, "{}", gettext("Spicy Mayo")),
            Topping::SesameSeeds => write!(f, "{}", gettext("Sesame Seeds")),
            Topping::EelSauce => write!(f, "{}", gettext("Eel Sauce")),
            Topping::None => write!(f, "{}", gettext("None")),
        }
    }
}

impl Choice for Topping {
    const COUNT: usize = 5;

    fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }
}

/// Preparation style.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(usize)]
pub enum Style {
    /// Round roll.
    Traditional,
    /// Cone.
    HandRoll,
}

impl Style {
    fn shape(self) -> String {
        match self {
            Style::Traditional => gettext("round"),
            Style::HandRoll => gettext("cone"),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Style::Traditional => write!(f, "{}", gettext("Traditional Roll")),
            Style::HandRoll => write!(f, "{}", gettext("Hand Roll")),
        }
    }
}

impl Choice for Style {
    const COUNT: usize = 2;

    fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }
}

/// The sushi built by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sushi {
    pub chef: String,
    pub rice: Rice,
    pub filling: Filling,
    pub topping: Topping,
    pub style: Style,
}

impl Sushi {
    /// Summary of the ingredients, one line per ingredient.
    pub fn ingredients(&self) -> Vec<String> {
        let mut lines: Vec<String> = vec![
            self.rice.color().paint(&format!(
                " {}: {} - {}: {}",
                gettext("Rice"),
                self.rice,
                gettext("Pattern"),
                self.rice.pattern()
            )),
            self.filling.color().paint(&format!(
                " {}: {} - {}: {}",
                gettext("Filling"),
                self.filling,
                gettext("Pattern"),
                self.filling.pattern()
            )),
        ];
        match self.topping.pattern() {
            Some(pattern) => lines.push(self.topping.color().paint(&format!(
                " {}: {} - {}: {pattern}",
                gettext("Topping"),
                self.topping,
                gettext("Pattern")
            ))),
            None => lines.push(format!(" {}: {}", gettext("Topping"), self.topping)),
        }
        lines.push(format!(
            " {}{}: {} - {} {}{RESET}",
            Color::BrightMagenta.code(),
            gettext("Style"),
            self.style,
            self.style.shape(),
            gettext("shape")
        ));
        lines
    }

    /// ASCII art of the sushi.
    pub fn art(&self) -> Vec<String> {
        match self.style {
            Style::Traditional => self.round_art(),
            Style::HandRoll => self.cone_art(),
        }
    }

    fn round_art(&self) -> Vec<String> {
        let layer = |pattern: &str| format!("           |  {pattern}  {pattern}  {pattern}  |");
        let rice: String = self.rice.color().paint(&layer(self.rice.pattern()));

        let mut lines: Vec<String> = vec![
            "             _________________".to_string(),
            "            /                 \\".to_string(),
            format!("{rice}  <- {}", gettext("Rice")),
            format!(
                "{}  <- {}",
                self.filling.color().paint(&layer(self.filling.pattern())),
                self.filling
            ),
            rice,
        ];
        if let Some(pattern) = self.topping.pattern() {
            lines.push(format!(
                "{}  <- {}",
                self.topping.color().paint(&layer(pattern)),
                self.topping
            ));
        }
        lines.push("            \\_________________/".to_string());
        lines
    }

    fn cone_art(&self) -> Vec<String> {
        let mut lines: Vec<String> = vec![
            "                  /|".to_string(),
            format!(
                "{}  <- {}",
                self.filling
                    .color()
                    .paint(&format!("                 / | {}", self.filling.pattern())),
                self.filling
            ),
        ];
        if let Some(pattern) = self.topping.pattern() {
            lines.push(format!(
                "{}  <- {}",
                self.topping
                    .color()
                    .paint(&format!("                /  | {pattern}")),
                self.topping
            ));
        }
        for i in 0..2 {
            let line: String = self.rice.color().paint(&format!(
                "{}/ {}| {}",
                " ".repeat(15 - i),
                " ".repeat(i + 2),
                self.rice.pattern()
            ));
            if i == 0 {
                lines.push(format!("{line}  <- {}", gettext("Rice")));
            } else {
                lines.push(line);
            }
        }
        lines.push("             /_____|".to_string());
        lines.push(format!("              {}", gettext("Cone!")));
        lines
    }
}

fn header<W: Write>(output: &mut W, title: &str) -> io::Result<()> {
    writeln!(output, " \n{}\n", Color::BrightCyan.paint_bold(&format!("--- {title} ---")))
}

/// Present the options and ask until the player selects a valid one.
fn ask_choice<T: Choice, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    title: &str,
    question: &str,
) -> io::Result<T> {
    header(output, title)?;
    writeln!(output)?;
    for option in (0..T::COUNT).filter_map(T::from_index).enumerate() {
        writeln!(output, " [{}] {}", option.0 + 1, option.1)?;
    }

    loop {
        write!(output, "\n{question} ({}): ", choice_list(T::COUNT))?;
        output.flush()?;
        let answer: String = read_line(input)?;
        match parse_choice::<T>(&answer) {
            Some(choice) => {
                debug!("Selected: {choice}");
                return Ok(choice);
            }
            None => writeln!(output, "  {}", hint(T::COUNT))?,
        }
    }
}

fn you_chose<W: Write>(output: &mut W, what: &dyn fmt::Display) -> io::Result<()> {
    writeln!(
        output,
        "\n{}",
        Color::BrightMagenta.paint(&format!("{} {what}!", gettext("You chose")))
    )
}

/// Ask the player for the four decisions.
pub fn ask_sushi<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Sushi> {
    write!(output, "{} ", gettext("What is your chef name?"))?;
    output.flush()?;
    let mut chef: String = read_line(input)?.trim().to_string();
    if chef.is_empty() {
        chef = "chef".to_string();
    }
    writeln!(
        output,
        "\n{}\n",
        Color::BrightMagenta.paint(&format!(
            " {} {chef}! {}",
            gettext("Welcome,"),
            gettext("Let's begin!")
        ))
    )?;

    let rice: Rice = ask_choice(
        input,
        output,
        &gettext("STEP 1: Choose Your Rice"),
        &gettext("Select your rice"),
    )?;
    you_chose(output, &rice)?;

    let filling: Filling = ask_choice(
        input,
        output,
        &gettext("STEP 2: Choose Your Filling"),
        &gettext("Select your filling"),
    )?;
    you_chose(output, &filling)?;

    let topping: Topping = ask_choice(
        input,
        output,
        &gettext("STEP 3: Choose Your Topping"),
        &gettext("Select your topping"),
    )?;
    if topping == Topping::None {
        writeln!(
            output,
            "\n{}",
            Color::BrightMagenta.paint(&gettext("Classic choice, keeping it simple!"))
        )?;
    } else {
        you_chose(output, &topping)?;
    }

    let style: Style = ask_choice(
        input,
        output,
        &gettext("STEP 4: Choose Your Style"),
        &gettext("Select your style"),
    )?;
    you_chose(output, &style)?;

    Ok(Sushi {
        chef,
        rice,
        filling,
        topping,
        style,
    })
}

/// Play the game.
pub fn play<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    header(output, &gettext("WELCOME TO SUSHI ADVENTURE!"))?;
    writeln!(
        output,
        "{}\n",
        gettext(
            "You are a sushi apprentice looking to master your sushi-making.\n\
             Here, you'll make four key decisions: choosing your rice, fillings, topping, and \
             style, to create your very own delicious sushi roll.\n\
             Let's make something delicious together!"
        )
    )?;

    let sushi: Sushi = ask_sushi(input, output)?;
    debug!("Sushi: {sushi:?}");

    writeln!(
        output,
        "\n{}\n",
        Color::Green.paint_bold(&gettext("...Creating your SUSHI..."))
    )?;
    writeln!(
        output,
        "\n{}\n",
        Color::BrightCyan.paint_bold(&gettext("--- YOUR INGREDIENTS ---"))
    )?;
    for line in sushi.ingredients() {
        writeln!(output, "{line}")?;
    }

    writeln!(output, "\n{}", "-".repeat(60))?;
    writeln!(
        output,
        "                {}",
        Color::BrightCyan.paint_bold(&gettext("YOUR SUSHI!"))
    )?;
    writeln!(output, "{}\n", "=".repeat(60))?;
    for line in sushi.art() {
        writeln!(output, "{line}")?;
    }

    writeln!(
        output,
        "\n {}",
        Color::BrightCyan.paint_bold(&format!("{} {}!", gettext("Congratulations, Chef"), sushi.chef))
    )?;
    writeln!(
        output,
        "\n {}",
        Color::BrightCyan.paint_bold(&gettext("Enjoy Your Sushi!"))
    )?;
    writeln!(output, "\n{}\n", "-".repeat(60))?;
    writeln!(output, "\n {} \n", gettext("Thank you for playing SUSHI ADVENTURE!"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(answers: &str) -> (io::Result<Sushi>, String) {
        let mut input: &[u8] = answers.as_bytes();
        let mut output: Vec<u8> = Vec::new();
        let sushi: io::Result<Sushi> = ask_sushi(&mut input, &mut output);
        (sushi, String::from_utf8(output).expect("Invalid UTF-8"))
    }

    #[test]
    fn choice_lists() {
        assert_eq!(choice_list(2), "1 or 2");
        assert_eq!(choice_list(3), "1, 2, or 3");
        assert_eq!(choice_list(5), "1, 2, 3, 4, or 5");
    }

    #[test]
    fn hints() {
        assert_eq!(hint(2), "Please enter 1 or 2.");
        assert_eq!(hint(3), "Please enter 1, 2, or 3.");
        assert_eq!(hint(5), "Please enter a number between 1 and 5.");
    }

    #[test]
    fn parse_answers() {
        assert_eq!(parse_choice::<Rice>("2"), Some(Rice::Brown));
        assert_eq!(parse_choice::<Rice>(" 3 "), Some(Rice::Black));
        assert_eq!(parse_choice::<Rice>("0"), None);
        assert_eq!(parse_choice::<Rice>("4"), None);
        assert_eq!(parse_choice::<Rice>("-1"), None);
        assert_eq!(parse_choice::<Rice>("+1"), None);
        assert_eq!(parse_choice::<Rice>("two"), None);
        assert_eq!(parse_choice::<Rice>(""), None);
        assert_eq!(parse_choice::<Topping>("5"), Some(Topping::None));
        assert_eq!(parse_choice::<Style>("3"), None);
        assert_eq!(parse_choice::<Filling>("99999999999999999999999"), None);
    }

    #[test]
    fn full_sushi() {
        let (sushi, text) = run("Mika\n1\n3\n2\n1\n");
        let sushi: Sushi = sushi.expect("Cannot build the sushi");
        assert_eq!(
            sushi,
            Sushi {
                chef: "Mika".to_string(),
                rice: Rice::White,
                filling: Filling::TempuraShrimp,
                topping: Topping::SpicyMayo,
                style: Style::Traditional,
            }
        );
        assert!(text.contains(" [3] Tempura Shrimp"));
        assert!(text.contains("Select your rice (1, 2, or 3): "));
        assert!(text.contains("Select your style (1 or 2): "));
    }

    #[test]
    fn empty_name_and_invalid_answers() {
        let (sushi, text) = run("  \n7\nx\n2\n0\n5\n5\n3\n2\n");
        let sushi: Sushi = sushi.expect("Cannot build the sushi");
        assert_eq!(sushi.chef, "chef");
        assert_eq!(sushi.rice, Rice::Brown);
        assert_eq!(sushi.filling, Filling::Eel);
        assert_eq!(sushi.topping, Topping::None);
        assert_eq!(sushi.style, Style::HandRoll);
        assert_eq!(text.matches("Please enter 1, 2, or 3.").count(), 2);
        assert_eq!(text.matches("Please enter a number between 1 and 5.").count(), 1);
        assert_eq!(text.matches("Please enter 1 or 2.").count(), 1);
        assert!(text.contains("Classic choice, keeping it simple!"));
    }

    #[test]
    fn input_ends_too_early() {
        let (sushi, _) = run("Mika\n1\n");
        assert_eq!(
            sushi.map(|_| ()).unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn round_roll_art() {
        let sushi: Sushi = Sushi {
            chef: "chef".to_string(),
            rice: Rice::Black,
            filling: Filling::Salmon,
            topping: Topping::None,
            style: Style::Traditional,
        };
        let art: Vec<String> = sushi.art();
        // No topping layer
        assert_eq!(art.len(), 6);
        assert!(art[2].contains("###  ###  ###"));
        assert!(art[3].ends_with("<- Salmon"));
        assert!(art[5].contains("\\_________________/"));
        assert!(sushi.ingredients()[2].ends_with("Topping: None"));
    }

    #[test]
    fn cone_art() {
        let sushi: Sushi = Sushi {
            chef: "chef".to_string(),
            rice: Rice::White,
            filling: Filling::Cucumber,
            topping: Topping::Avocado,
            style: Style::HandRoll,
        };
        let art: Vec<String> = sushi.art();
        assert_eq!(art.len(), 7);
        assert!(art[1].contains("/ | |||"));
        assert!(art[2].ends_with("<- Avocado"));
        assert!(art[3].contains("               /   | ooo"));
        assert!(art[3].ends_with("<- Rice"));
        assert!(art[6].contains("Cone!"));
    }

    #[test]
    fn full_game() {
        let mut input: &[u8] = b"\n1\n1\n1\n2\n";
        let mut output: Vec<u8> = Vec::new();
        play(&mut input, &mut output).expect("The game failed");
        let text: String = String::from_utf8(output).expect("Invalid UTF-8");
        assert!(text.contains("WELCOME TO SUSHI ADVENTURE!"));
        assert!(text.contains("Congratulations, Chef chef!"));
        assert!(text.contains("Thank you for playing SUSHI ADVENTURE!"));
    }
}

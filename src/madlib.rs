/*
madlib.rs

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

//! Mad Libs: "One More Game".
//!
//! The player types words of different kinds (nouns, adjectives, verbs...) without knowing the
//! story, and the words are then inserted into the story.

use formatx::formatx;
use gettextrs::gettext;
use log::debug;
use std::io::{self, BufRead, Write};

use crate::ansi::{BOLD, Color, RESET};

/// Number of words to ask.
pub const WORD_COUNT: usize = 17;

/// Questions for the words, in the order of the story placeholders.
const PROMPTS: [&str; WORD_COUNT] = [
    "Enter a noun (e.g. mom, dad): ",
    "Provide an adjective (e.g. tough, tricky): ",
    "Give another adjective (e.g. funny, creative): ",
    "Enter a part of the body: ",
    "Give a verb (e.g. defeat): ",
    "Enter a place: ",
    "Provide a celebrity name: ",
    "Give an animal: ",
    "Give a number: ",
    "Enter another adjective (e.g. final): ",
    "Enter a last name: ",
    "Enter a school subject: ",
    "Name a type of food: ",
    "Enter the name of a person in the room: ",
    "Give a male first name: ",
    "Provide a verb that ends in -ing: ",
    "Enter an exclamation: ",
];

const STORY: &str = "\
Convincing your {family_member} to let you stay up past your bedtime to play video games
can be {challenge_adjective}, but it's not impossible. Here are some {excuse_adjective} excuses
to use when you need one last game.

1. My {body_part} hurts. The only way it will feel better is if I {action_verb} these
cyborgs and save (the) {place}.

2. {celebrity} also plays {animal} Hut so if you want me to be successful in life,
please give me {number} minutes to finish the {level_adjective} level.

3. Mrs. {last_name}, my {subject} teacher, said that video games make you smart.
She plays {food} Assault, so she knows.

4. There's nothing else to do! {person} isn't here to play with, Grandpa {grandpa} went
to bed, and it's {weather_gerund} outside.

5. {exclamation}! If you let me play Night Woods, I'll clean my room. Please think about it.
";

/// Read a line from the input, without the end-of-line characters.
///
/// Reaching the end of the input is an error.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line: String = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "the input ended before the game",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask the player for the words.
pub fn ask_words<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<[String; WORD_COUNT]> {
    let mut words: [String; WORD_COUNT] = Default::default();
    for (word, prompt) in words.iter_mut().zip(PROMPTS) {
        write!(output, "{}", gettext(prompt))?;
        output.flush()?;
        *word = read_line(input)?;
    }
    debug!("Words: {words:?}");
    Ok(words)
}

/// Insert the words into the story.
///
/// Words alternate between cyan and magenta.
pub fn build_story(words: &[String; WORD_COUNT]) -> io::Result<String> {
    let w: Vec<String> = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let color: Color = if i % 2 == 0 {
                Color::Cyan
            } else {
                Color::Magenta
            };
            color.paint(word)
        })
        .collect();

    formatx!(
        gettext(STORY),
        family_member = &w[0],
        challenge_adjective = &w[1],
        excuse_adjective = &w[2],
        body_part = &w[3],
        action_verb = &w[4],
        place = &w[5],
        celebrity = &w[6],
        animal = &w[7],
        number = &w[8],
        level_adjective = &w[9],
        last_name = &w[10],
        subject = &w[11],
        food = &w[12],
        person = &w[13],
        grandpa = &w[14],
        weather_gerund = &w[15],
        exclamation = &w[16]
    )
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{e:?}")))
}

/// Play the game.
pub fn play<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output, " \n")?;
    writeln!(
        output,
        "{}\n",
        Color::Magenta.paint_bold(&gettext("--- Welcome to Mad Libs: One More Game! ---"))
    )?;
    writeln!(
        output,
        "{}\n",
        Color::Cyan.paint(&gettext(
            "Fill in the blanks with your own words and create a funny story!"
        ))
    )?;

    let words: [String; WORD_COUNT] = ask_words(input, output)?;
    let story: String = build_story(&words)?;

    writeln!(
        output,
        "\n{}{BOLD}{}{RESET}\n",
        Color::Magenta.code(),
        gettext("--- YOUR MAD LIBS STORY ---")
    )?;
    writeln!(output, "{story}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> String {
        (1..=WORD_COUNT)
            .map(|i| format!("word{i}\n"))
            .collect()
    }

    #[test]
    fn words_are_inserted_in_order() {
        let text: String = answers();
        let mut input: &[u8] = text.as_bytes();
        let mut output: Vec<u8> = Vec::new();
        let words: [String; WORD_COUNT] =
            ask_words(&mut input, &mut output).expect("Cannot read the words");
        assert_eq!(words[0], "word1");
        assert_eq!(words[16], "word17");

        let story: String = build_story(&words).expect("Cannot build the story");
        assert!(story.starts_with(&format!("Convincing your {}", Color::Cyan.paint("word1"))));
        assert!(story.contains(&format!("can be {}", Color::Magenta.paint("word2"))));
        assert!(story.contains(&format!("5. {}!", Color::Cyan.paint("word17"))));
        assert!(!story.contains('{'));
    }

    #[test]
    fn full_game() {
        let text: String = answers();
        let mut input: &[u8] = text.as_bytes();
        let mut output: Vec<u8> = Vec::new();
        play(&mut input, &mut output).expect("The game failed");

        let text: String = String::from_utf8(output).expect("Invalid UTF-8");
        assert!(text.contains("Welcome to Mad Libs"));
        assert!(text.contains("Enter a noun (e.g. mom, dad): "));
        assert!(text.contains("YOUR MAD LIBS STORY"));
        assert!(text.contains("Grandpa"));
    }

    #[test]
    fn windows_line_endings() {
        let mut input: &[u8] = b"grandma\r\n";
        assert_eq!(read_line(&mut input).expect("Cannot read"), "grandma");
    }

    #[test]
    fn input_ends_too_early() {
        let mut input: &[u8] = b"mom\ntough\n";
        let mut output: Vec<u8> = Vec::new();
        let err: io::Error = play(&mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}

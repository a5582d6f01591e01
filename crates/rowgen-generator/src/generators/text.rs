//! Text value generators: lorem words and paragraphs, letter strings and
//! book data.

use super::corpus::{BOOK_AUTHORS, BOOK_TITLES};
use super::numeric::draw_count;
use super::person::pick;
use fake::faker::lorem::en::{Sentences, Word};
use fake::Fake;
use rand::distributions::Alphanumeric;
use rand::Rng;
use rowgen_core::Value;

/// Sentences per generated paragraph.
const PARAGRAPH_SENTENCES: std::ops::Range<usize> = 3..7;

fn word<R: Rng>(rng: &mut R) -> String {
    Word().fake_with_rng(rng)
}

/// Sentences joined by single spaces so a paragraph stays on one line.
fn paragraph<R: Rng>(rng: &mut R) -> String {
    let sentences: Vec<String> = Sentences(PARAGRAPH_SENTENCES).fake_with_rng(rng);
    sentences.join(" ")
}

pub fn generate_word<R: Rng>(rng: &mut R) -> Value {
    Value::Text(word(rng))
}

/// Word count drawn from `[min, max)`, words joined by single spaces.
pub fn generate_words<R: Rng>(rng: &mut R, min: i64, max: i64) -> Value {
    let count = draw_count(rng, min, max);
    let words: Vec<String> = (0..count).map(|_| word(rng)).collect();
    Value::Text(words.join(" "))
}

pub fn generate_paragraph<R: Rng>(rng: &mut R) -> Value {
    Value::Text(paragraph(rng))
}

/// Paragraph count drawn from `[min, max)`, paragraphs concatenated with no
/// separator.
pub fn generate_paragraphs<R: Rng>(rng: &mut R, min: i64, max: i64) -> Value {
    let count = draw_count(rng, min, max);
    let body: String = (0..count).map(|_| paragraph(rng)).collect();
    Value::Text(body)
}

/// Alphanumeric string with length drawn from `[min, max)`.
pub fn generate_letters<R: Rng>(rng: &mut R, min: i64, max: i64) -> Value {
    let length = draw_count(rng, min, max);
    let letters: String = (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect();
    Value::Text(letters)
}

pub fn generate_book_title<R: Rng>(rng: &mut R) -> Value {
    Value::Text(pick(rng, BOOK_TITLES))
}

pub fn generate_book_author<R: Rng>(rng: &mut R) -> Value {
    Value::Text(pick(rng, BOOK_AUTHORS))
}

//! Word boundaries for Ctrl+Left / Ctrl+Right.
//!
//! Classification is ASCII-only. Any non-ASCII character is plain content:
//! it joins whatever run it sits in and never starts a break on its own.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Alnum,
    Punct,
    Space,
    Other,
}

impl CharClass {
    pub fn of(ch: char) -> Self {
        if !ch.is_ascii() {
            CharClass::Other
        } else if ch.is_ascii_whitespace() {
            CharClass::Space
        } else if ch.is_ascii_alphanumeric() {
            CharClass::Alnum
        } else if ch.is_ascii_punctuation() {
            CharClass::Punct
        } else {
            // ASCII control characters
            CharClass::Other
        }
    }
}

/// `true` if `a` followed by `b` (or the reverse) splits a word.
#[inline]
fn breaks_between(a: CharClass, b: CharClass) -> bool {
    matches!(
        (a, b),
        (CharClass::Alnum, CharClass::Punct) | (CharClass::Punct, CharClass::Alnum)
    )
}

/// Merge `next` into a run whose class so far is `run`. `Other` adopts the
/// class of its neighbours.
#[inline]
fn run_class(run: CharClass, next: CharClass) -> CharClass {
    if run == CharClass::Other { next } else { run }
}

/// Nearest word boundary before `cursor` (character offsets).
///
/// Skips whitespace directly before the cursor, then walks back over one
/// run of content, stopping at whitespace or at an alnum/punct change.
///
/// # Examples
///
/// ```
/// use edit_core::prev_word_boundary;
///
/// assert_eq!(prev_word_boundary("hello", 5), 0);
/// assert_eq!(prev_word_boundary("foo bar", 7), 4);
/// assert_eq!(prev_word_boundary("foo bar", 4), 0);
/// assert_eq!(prev_word_boundary("a.b", 3), 2);
/// ```
pub fn prev_word_boundary(text: &str, cursor: usize) -> usize {
    let classes: Vec<CharClass> = text.chars().take(cursor).map(CharClass::of).collect();
    let mut pos = classes.len();

    while pos > 0 && classes[pos - 1] == CharClass::Space {
        pos -= 1;
    }

    let mut run = CharClass::Other;
    while pos > 0 {
        let class = classes[pos - 1];
        if class == CharClass::Space || breaks_between(run, class) {
            break;
        }
        run = run_class(run, class);
        pos -= 1;
    }
    pos
}

/// Nearest word boundary after `cursor` (character offsets).
///
/// From inside a word, walks to its end and then past the whitespace that
/// follows, landing on the start of the next word. From whitespace, skips
/// to the next word start. An alnum/punct change ends the walk early.
///
/// # Examples
///
/// ```
/// use edit_core::next_word_boundary;
///
/// assert_eq!(next_word_boundary("foo bar", 0), 4);
/// assert_eq!(next_word_boundary("foo bar", 4), 7);
/// assert_eq!(next_word_boundary("a.b", 0), 1);
/// ```
pub fn next_word_boundary(text: &str, cursor: usize) -> usize {
    let classes: Vec<CharClass> = text.chars().map(CharClass::of).collect();
    let len = classes.len();
    let mut pos = cursor.min(len);

    let mut run = CharClass::Other;
    while pos < len {
        let class = classes[pos];
        if class == CharClass::Space {
            break;
        }
        if breaks_between(run, class) {
            return pos;
        }
        run = run_class(run, class);
        pos += 1;
    }

    while pos < len && classes[pos] == CharClass::Space {
        pos += 1;
    }
    pos
}

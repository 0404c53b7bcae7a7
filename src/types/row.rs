use std::{borrow::Cow, cmp::Ordering, fmt};

use crate::{
    planner::error::PrepareError,
    types::{
        COLUMN_DATE_SIZE, COLUMN_PROVIDER_SIZE, COLUMN_STB_SIZE, COLUMN_TIME_SIZE,
        COLUMN_TITLE_SIZE, DATE_OFFSET, DATE_SIZE, LEAF_NODE_KEY_SIZE, PROVIDER_OFFSET,
        PROVIDER_SIZE, REV_OFFSET, REV_SIZE, ROW_SIZE, STB_OFFSET, STB_SIZE, TIME_OFFSET,
        TIME_SIZE, TITLE_OFFSET, TITLE_SIZE,
        error::{DatabaseError, Result},
    },
};

/// A single record of the table. Every text column is kept as a fixed-size,
/// null-terminated byte array so that a row always serializes to exactly
/// `ROW_SIZE` bytes.
#[derive(Clone, PartialEq)]
pub struct Row {
    stb: [u8; STB_SIZE],
    title: [u8; TITLE_SIZE],
    provider: [u8; PROVIDER_SIZE],
    date: [u8; DATE_SIZE],
    rev: f32,
    time: [u8; TIME_SIZE],
}

impl Row {
    /// Builds a row from already tokenized input. A negative `rev` is
    /// reported before any over-long column. Each text field ends at its
    /// first NUL byte, which is also where its length is measured.
    pub fn new(
        stb: &str,
        title: &str,
        provider: &str,
        date: &str,
        rev: f32,
        time: &str,
    ) -> std::result::Result<Self, PrepareError> {
        if rev < 0.0 {
            return Err(PrepareError::NegativeRev);
        }
        let (stb, title, provider, date, time) = (
            until_nul(stb),
            until_nul(title),
            until_nul(provider),
            until_nul(date),
            until_nul(time),
        );
        if stb.len() > COLUMN_STB_SIZE
            || title.len() > COLUMN_TITLE_SIZE
            || provider.len() > COLUMN_PROVIDER_SIZE
            || date.len() > COLUMN_DATE_SIZE
            || time.len() > COLUMN_TIME_SIZE
        {
            return Err(PrepareError::StringTooLong);
        }

        let mut row = Self::empty();
        write_cstr(&mut row.stb, stb);
        write_cstr(&mut row.title, title);
        write_cstr(&mut row.provider, provider);
        write_cstr(&mut row.date, date);
        row.rev = rev;
        write_cstr(&mut row.time, time);
        Ok(row)
    }

    fn empty() -> Self {
        Self {
            stb: [0; STB_SIZE],
            title: [0; TITLE_SIZE],
            provider: [0; PROVIDER_SIZE],
            date: [0; DATE_SIZE],
            rev: 0.0,
            time: [0; TIME_SIZE],
        }
    }

    pub fn stb(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(cstr_bytes(&self.stb))
    }

    pub fn title(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(cstr_bytes(&self.title))
    }

    pub fn provider(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(cstr_bytes(&self.provider))
    }

    pub fn date(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(cstr_bytes(&self.date))
    }

    pub fn rev(&self) -> f32 {
        self.rev
    }

    pub fn time(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(cstr_bytes(&self.time))
    }

    /// The ordering key of this row: `stb`, `title` and `date` concatenated.
    pub fn key(&self) -> Key {
        let mut key = [0u8; LEAF_NODE_KEY_SIZE];
        let mut offset = 0;
        for part in [&self.stb[..], &self.title[..], &self.date[..]] {
            let bytes = cstr_bytes(part);
            key[offset..offset + bytes.len()].copy_from_slice(bytes);
            offset += bytes.len();
        }
        Key(key)
    }

    /// Copies every column into `destination` at its fixed offset, using the
    /// column capacity as the copy width.
    pub fn serialize(&self, destination: &mut [u8]) -> Result<()> {
        if destination.len() < ROW_SIZE {
            return Err(DatabaseError::SerializationError {
                details: format!(
                    "Row needs {} bytes, destination has {}",
                    ROW_SIZE,
                    destination.len()
                ),
            });
        }

        destination[STB_OFFSET..STB_OFFSET + STB_SIZE].copy_from_slice(&self.stb);
        destination[TITLE_OFFSET..TITLE_OFFSET + TITLE_SIZE].copy_from_slice(&self.title);
        destination[PROVIDER_OFFSET..PROVIDER_OFFSET + PROVIDER_SIZE]
            .copy_from_slice(&self.provider);
        destination[DATE_OFFSET..DATE_OFFSET + DATE_SIZE].copy_from_slice(&self.date);
        destination[REV_OFFSET..REV_OFFSET + REV_SIZE].copy_from_slice(&self.rev.to_le_bytes());
        destination[TIME_OFFSET..TIME_OFFSET + TIME_SIZE].copy_from_slice(&self.time);
        Ok(())
    }

    pub fn deserialize(source: &[u8]) -> Result<Self> {
        if source.len() < ROW_SIZE {
            return Err(DatabaseError::SerializationError {
                details: format!(
                    "Row needs {} bytes, source has {}",
                    ROW_SIZE,
                    source.len()
                ),
            });
        }

        let mut row = Self::empty();
        row.stb.copy_from_slice(&source[STB_OFFSET..STB_OFFSET + STB_SIZE]);
        row.title.copy_from_slice(&source[TITLE_OFFSET..TITLE_OFFSET + TITLE_SIZE]);
        row.provider
            .copy_from_slice(&source[PROVIDER_OFFSET..PROVIDER_OFFSET + PROVIDER_SIZE]);
        row.date.copy_from_slice(&source[DATE_OFFSET..DATE_OFFSET + DATE_SIZE]);
        row.rev = f32::from_le_bytes([
            source[REV_OFFSET],
            source[REV_OFFSET + 1],
            source[REV_OFFSET + 2],
            source[REV_OFFSET + 3],
        ]);
        row.time.copy_from_slice(&source[TIME_OFFSET..TIME_OFFSET + TIME_SIZE]);
        Ok(row)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {}, {})",
            self.stb(),
            self.title(),
            self.provider(),
            self.date(),
            format_rev(self.rev),
            self.time()
        )
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("stb", &self.stb())
            .field("title", &self.title())
            .field("provider", &self.provider())
            .field("date", &self.date())
            .field("rev", &self.rev)
            .field("time", &self.time())
            .finish()
    }
}

/// Fixed-width cell key. Compared as a null-terminated byte string, so any
/// bytes after the first terminator are ignored.
#[derive(Clone)]
pub struct Key([u8; LEAF_NODE_KEY_SIZE]);

impl Key {
    /// Reads a key out of a key slot. Bytes past `LEAF_NODE_KEY_SIZE` are ignored.
    pub fn from_slot(slot: &[u8]) -> Self {
        let mut key = [0u8; LEAF_NODE_KEY_SIZE];
        let len = slot.len().min(LEAF_NODE_KEY_SIZE);
        key[..len].copy_from_slice(&slot[..len]);
        // A slot without a terminator still has to compare as a string.
        key[LEAF_NODE_KEY_SIZE - 1] = 0;
        Self(key)
    }

    /// Key bytes up to, not including, the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        cstr_bytes(&self.0)
    }

    /// The full slot image, terminator and padding included.
    pub fn as_slot(&self) -> &[u8; LEAF_NODE_KEY_SIZE] {
        &self.0
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.to_string()).finish()
    }
}

// Six decimals, with `nan` and `inf` spelled the way printf's `%f` does.
fn format_rev(rev: f32) -> String {
    if rev.is_nan() {
        "nan".to_string()
    } else if rev.is_infinite() {
        if rev < 0.0 { "-inf" } else { "inf" }.to_string()
    } else {
        format!("{:.6}", rev)
    }
}

fn until_nul(value: &str) -> &str {
    value.find('\0').map_or(value, |end| &value[..end])
}

fn write_cstr(destination: &mut [u8], value: &str) {
    let bytes = value.as_bytes();
    destination[..bytes.len()].copy_from_slice(bytes);
    destination[bytes.len()] = 0;
}

fn cstr_bytes(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    &bytes[..end]
}

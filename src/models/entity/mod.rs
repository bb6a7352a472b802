// Entity module
// Timeline rows and the dated blocks they own

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::range::DateRange;
use crate::utils::date::{days_between, iso_date, parse_date};

/// Row identifier as supplied by the host data. Numbers and strings are both common.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

/// Position of a block in the host's entity list: row index, then index within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockKey {
    pub row: usize,
    pub index: usize,
}

impl BlockKey {
    pub fn new(row: usize, index: usize) -> Self {
        Self { row, index }
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.index)
    }
}

/// One timeline row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    /// Dated items on this row. The JSON field keeps the name `series`.
    #[serde(default, rename = "series")]
    pub blocks: Vec<Block>,
}

impl Entity {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    /// Append a block, returning self for chaining.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

/// A dated item rendered as a draggable rectangle on its row.
///
/// Dates that failed to parse are held as `None`; such a block is skipped when the
/// boundary is resolved and is not placed on the grid. The unparsed value is kept in
/// `extra` and written back out unchanged until the block is given a new range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawBlock")]
pub struct Block {
    #[serde(serialize_with = "iso_date::serialize", skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(serialize_with = "iso_date::serialize", skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    /// Any other fields from the input, handed back untouched in [`Block::payload`].
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Block as read from JSON, dates not yet parsed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlock {
    #[serde(default)]
    start: Option<Value>,
    #[serde(default)]
    end: Option<Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    css_class: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        let mut extra = raw.extra;
        let start = take_date(raw.start, "start", &mut extra);
        let end = take_date(raw.end, "end", &mut extra);
        Self {
            start,
            end,
            title: raw.title,
            color: raw.color,
            css_class: raw.css_class,
            extra,
        }
    }
}

/// Parse a raw date field. Anything that is not a date goes into `extra` under `key`.
fn take_date(raw: Option<Value>, key: &str, extra: &mut Map<String, Value>) -> Option<NaiveDate> {
    let value = raw.filter(|value| !value.is_null())?;
    let date = value.as_str().and_then(parse_date);
    if date.is_none() {
        extra.insert(key.to_string(), value);
    }
    date
}

impl Block {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    pub fn builder() -> BlockBuilder {
        BlockBuilder::default()
    }

    /// The block's range when both dates are defined.
    pub fn range(&self) -> Option<DateRange> {
        Some(DateRange::new(self.start?, self.end?))
    }

    /// Days occupied, used as the duration label. Zero if either date is undefined.
    pub fn duration_days(&self) -> i64 {
        days_between(self.start, self.end)
    }

    /// Write a new range onto the block.
    pub fn set_range(&mut self, range: DateRange) {
        self.start = Some(range.start);
        self.end = Some(range.end);
        self.extra.remove("start");
        self.extra.remove("end");
    }

    /// Hover text: the explicit title, or "<row name>, <n> nights".
    pub fn tooltip(&self, owner: &Entity) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("{}, {} nights", owner.name, self.duration_days()),
        }
    }

    /// Data handed to host callbacks: the owning row's id and name merged with every
    /// field of this block, the block's fields taking precedence.
    pub fn payload(&self, owner: &Entity) -> Value {
        let mut payload = Map::new();
        payload.insert("id".to_string(), serde_json::json!(owner.id));
        payload.insert("name".to_string(), Value::String(owner.name.clone()));
        if let Ok(Value::Object(fields)) = serde_json::to_value(self) {
            payload.extend(fields);
        }
        Value::Object(payload)
    }
}

/// Builder for blocks with optional presentation fields
#[derive(Default)]
pub struct BlockBuilder {
    block: Block,
}

impl BlockBuilder {
    pub fn start(mut self, start: NaiveDate) -> Self {
        self.block.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDate) -> Self {
        self.block.end = Some(end);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.block.title = Some(title.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.block.color = Some(color.into());
        self
    }

    pub fn css_class(mut self, css_class: impl Into<String>) -> Self {
        self.block.css_class = Some(css_class.into());
        self
    }

    /// Attach an arbitrary pass-through field.
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.block.extra.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Block {
        self.block
    }
}

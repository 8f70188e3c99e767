/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! Human-readable renderings of a parsed message.
//!
//! `summary` is a coarse one-liner: enough for an operator scanning a log
//! stream to see who sent what, for which instrument, at what size and
//! price. `detail` is the per-field breakdown, with enum values annotated
//! from the dictionary.

use fixtranslate_dictionary::Dictionary;

use crate::result::ParseResult;

impl ParseResult {
    /// Renders a one-line digest of the message.
    ///
    /// Fields that are absent simply leave a blank; the digest never fails.
    ///
    /// # Arguments
    /// * `dict` - Dictionary supplying the message-type name table
    #[must_use]
    pub fn summary(&self, dict: &Dictionary) -> String {
        let ts = self
            .flat_text("SendingTime")
            .or_else(|| self.flat_text("TransactTime"))
            .unwrap_or_default();
        let sender = self.flat_text("SenderCompID").unwrap_or_default();
        let target = self.flat_text("TargetCompID").unwrap_or_default();

        let msg_type = self.flat_text("MsgType").unwrap_or_default();
        let msg_name = dict
            .msg_type_name(&msg_type)
            .map_or_else(|| msg_type.clone(), String::from);

        let cl_ord_id = self
            .flat_text("ClOrdID")
            .map(|id| format!(" ({id})"))
            .unwrap_or_default();

        let symbol = self
            .flat_text("Symbol")
            .or_else(|| self.flat_text("SecurityID"))
            .unwrap_or_default();
        let side = match self.flat_text("Side").as_deref() {
            Some("1") => "BUY".to_string(),
            Some("2") => "SELL".to_string(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let qty = self
            .flat_text("OrderQty")
            .or_else(|| self.flat_text("LeavesQty"))
            .unwrap_or_default();
        let price = self.flat_text("Price").unwrap_or_default();

        format!("{ts} {sender} -> {target} {msg_name}{cl_ord_id}: {symbol} {side} {qty} @ {price}")
    }

    /// Renders a per-field breakdown, one line per field.
    ///
    /// Known fields print as `Name(tag) = value`, with the enum description
    /// appended when the dictionary declares one. The common header and
    /// business tags lead; the rest follow in wire order, unknown tags last.
    ///
    /// # Arguments
    /// * `dict` - Dictionary supplying tag numbers and enum descriptions
    #[must_use]
    pub fn detail(&self, dict: &Dictionary) -> String {
        const PRIORITY: &[u32] = &[8, 35, 49, 56, 34, 52, 11, 17, 55, 54, 38, 40, 44, 39, 150, 10];

        let mut lines = Vec::new();
        for &tag in PRIORITY {
            if let Some(def) = dict.field(tag) {
                if let Some(value) = self.flat.get(&def.name) {
                    lines.push(detail_line(&def.name, tag, &value.to_string(), dict));
                }
            }
        }
        for (name, value) in &self.flat {
            match dict.field_by_name(name) {
                Some(def) if PRIORITY.contains(&def.tag) => {}
                Some(def) => lines.push(detail_line(name, def.tag, &value.to_string(), dict)),
                None => lines.push(format!("{name} = {value}")),
            }
        }
        for (tag, value) in &self.unknown {
            lines.push(format!("Tag{tag}({tag}) = {value}"));
        }
        lines.join("\n")
    }
}

fn detail_line(name: &str, tag: u32, value: &str, dict: &Dictionary) -> String {
    match dict.enum_desc(tag, value) {
        Some(desc) => format!("{name}({tag}) = {value}  // {desc}"),
        None => format!("{name}({tag}) = {value}"),
    }
}

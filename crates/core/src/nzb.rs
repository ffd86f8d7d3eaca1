//! Placeholder NZB documents.

use chrono::{DateTime, Utc};

/// Render a fixed two-segment NZB for `file_name`.
pub fn render_nzb(file_name: &str, now: DateTime<Utc>) -> String {
    let name = escape_xml(file_name);
    let date = now.format("%Y-%m-%d %H:%M:%S UTC");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE nzb PUBLIC "-//newzBin//DTD NZB 1.1//EN" "http://www.newzbin.com/DTD/nzb/nzb-1.1.dtd">
<nzb xmlns="http://www.newzbin.com/DTD/2003/nzb">
    <head>
        <meta type="title">{name}</meta>
        <meta type="date">{date}</meta>
    </head>
    <file poster="anonymous@example.com" date="1234567890" subject="{name} (1/1)">
        <groups>
            <group>alt.binaries.test</group>
        </groups>
        <segments>
            <segment bytes="512000" number="1">fake-segment-id-1</segment>
            <segment bytes="512000" number="2">fake-segment-id-2</segment>
        </segments>
    </file>
</nzb>"#
    )
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

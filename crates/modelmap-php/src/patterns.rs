//! Regex pattern table for PHP model declaration idioms.
//!
//! One pattern per idiom, matched against raw source text. Patterns are
//! scoped to the common declaration forms; anything they miss is a false
//! negative by design.

use regex::Regex;
use std::sync::LazyLock;

// class Foo ...
pub static RE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+[A-Za-z_]\w*").unwrap());

// abstract class Foo ...
pub static RE_ABSTRACT_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\babstract\s+class\b").unwrap());

// $table = 'custom_name' (either quote style)
pub static RE_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\$table\s*=\s*['"]([^'"]+)['"]"#).unwrap());

// $fillable = [ ... ] (body captured up to the first closing bracket)
pub static RE_FILLABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$fillable\s*=\s*\[(.*?)\]").unwrap());

// $casts = [ 'field' => 'type', ... ]
pub static RE_CASTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$casts\s*=\s*\[(.*?)\]").unwrap());

// $timestamps = false
pub static RE_TIMESTAMPS_OFF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$timestamps\s*=\s*false").unwrap());

// $incrementing = false
pub static RE_INCREMENTING_OFF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$incrementing\s*=\s*false").unwrap());

// $primaryKey = 'custom_key'
pub static RE_PRIMARY_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\$primaryKey\s*=\s*['"]([^'"]+)['"]"#).unwrap());

// one quoted string, either quote style (group 1 or group 2)
pub static RE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'([^']*)'|"([^"]*)""#).unwrap());

// 'field' => 'cast' pair, either quote style on both sides
pub static RE_CAST_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]([^'"]+)['"]\s*=>\s*['"]([^'"]+)['"]"#).unwrap());

// zero-argument accessor whose body calls a relationship-forming method on
// $this; captures method name, call name, and the call's first argument.
// An optional return-type hint between the signature and the brace is
// tolerated. The body match stops at the first closing brace.
pub static RE_RELATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)function\s+(\w+)\s*\(\s*\)\s*(?::\s*\??[A-Za-z_\\][\w\\]*\s*)?\{[^}]*?\$this\s*->\s*(hasOne|hasMany|belongsTo|belongsToMany)\s*\(\s*([^,)]+)",
    )
    .unwrap()
});

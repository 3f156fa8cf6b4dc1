//! English inflections for turning accessor names into type names and type
//! names into table names: `"activity_events"` classifies to
//! `"ActivityEvent"`, which tableizes back to `"activity_events"`.
//!
//! Rules are regular expressions checked in order, the first match wins. Only
//! the last word of a snake cased name is inflected.

use lazy_static::lazy_static;
use regex::Regex;

type Rules = Vec<(Regex, &'static str)>;

fn rules(table: &[(&str, &'static str)]) -> Rules {
    table
        .iter()
        .map(|(pattern, replacement)| (Regex::new(&format!("(?i){pattern}")).unwrap(), *replacement))
        .collect()
}

lazy_static! {
    static ref PLURALS: Rules = rules(&[
        (r"(quiz)$", "${1}zes"),
        (r"^(oxen)$", "${1}"),
        (r"^(ox)$", "${1}en"),
        (r"^(m|l)ice$", "${1}ice"),
        (r"^(m|l)ouse$", "${1}ice"),
        (r"(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
        (r"(x|ch|ss|sh)$", "${1}es"),
        (r"([^aeiouy]|qu)y$", "${1}ies"),
        (r"(hive)$", "${1}s"),
        (r"(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
        (r"sis$", "ses"),
        (r"([ti])a$", "${1}a"),
        (r"([ti])um$", "${1}a"),
        (r"(buffal|tomat)o$", "${1}oes"),
        (r"(bu)s$", "${1}ses"),
        (r"(alias|status)$", "${1}es"),
        (r"(octop|vir)i$", "${1}i"),
        (r"(octop|vir)us$", "${1}i"),
        (r"^(ax|test)is$", "${1}es"),
        (r"s$", "s"),
        (r"$", "s"),
    ]);
    static ref SINGULARS: Rules = rules(&[
        (r"(database)s$", "${1}"),
        (r"(quiz)zes$", "${1}"),
        (r"(matr)ices$", "${1}ix"),
        (r"(vert|ind)ices$", "${1}ex"),
        (r"^(ox)en", "${1}"),
        (r"(alias|status)(es)?$", "${1}"),
        (r"(octop|vir)(us|i)$", "${1}us"),
        (r"^(a)x[ie]s$", "${1}xis"),
        (r"(cris|test)(is|es)$", "${1}is"),
        (r"(shoe)s$", "${1}"),
        (r"(o)es$", "${1}"),
        (r"(bus)(es)?$", "${1}"),
        (r"^(m|l)ice$", "${1}ouse"),
        (r"(x|ch|ss|sh)es$", "${1}"),
        (r"(m)ovies$", "${1}ovie"),
        (r"(s)eries$", "${1}eries"),
        (r"([^aeiouy]|qu)ies$", "${1}y"),
        (r"([lr])ves$", "${1}f"),
        (r"(tive)s$", "${1}"),
        (r"(hive)s$", "${1}"),
        (r"([^f])ves$", "${1}fe"),
        (r"(^analy)(sis|ses)$", "${1}sis"),
        (r"([ti])a$", "${1}um"),
        (r"(n)ews$", "${1}ews"),
        (r"(ss)$", "${1}"),
        (r"s$", ""),
    ]);
    static ref CAMEL_ACRONYM: Regex = Regex::new(r"([A-Z\d]+)([A-Z][a-z])").unwrap();
    static ref CAMEL_WORD: Regex = Regex::new(r"([a-z\d])([A-Z])").unwrap();
}

// (singular, plural)
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

const UNCOUNTABLES: &[&str] = &[
    "equipment", "information", "rice", "money", "species", "series", "fish", "sheep", "jeans",
    "police", "news",
];

enum Number {
    Singular,
    Plural,
}

fn inflect(word: &str, number: Number) -> String {
    let (head, last) = match word.rsplit_once('_') {
        Some((head, last)) => (Some(head), last),
        None => (None, word),
    };
    let inflected = inflect_word(last, &number);
    match head {
        Some(head) => format!("{head}_{inflected}"),
        None => inflected,
    }
}

fn inflect_word(word: &str, number: &Number) -> String {
    let lowered = word.to_lowercase();
    if word.is_empty() || UNCOUNTABLES.contains(&lowered.as_str()) {
        return word.to_string();
    }
    for (singular, plural) in IRREGULARS {
        let (from, to) = match number {
            Number::Singular => (plural, singular),
            Number::Plural => (singular, plural),
        };
        if lowered == *from {
            return keep_initial_case(word, to);
        }
    }
    let rules = match number {
        Number::Singular => &*SINGULARS,
        Number::Plural => &*PLURALS,
    };
    for (rule, replacement) in rules.iter() {
        if rule.is_match(word) {
            return rule.replace(word, *replacement).into_owned();
        }
    }
    word.to_string()
}

fn keep_initial_case(original: &str, replacement: &str) -> String {
    match original.chars().next() {
        Some(initial) if initial.is_uppercase() => camelize(replacement),
        _ => replacement.to_string(),
    }
}

/// `"posts"` becomes `"post"`, `"summaries"` becomes `"summary"`.
pub fn singularize(word: &str) -> String {
    inflect(word, Number::Singular)
}

/// `"post"` becomes `"posts"`, `"summary"` becomes `"summaries"`.
pub fn pluralize(word: &str) -> String {
    inflect(word, Number::Plural)
}

/// `"activity_event"` becomes `"ActivityEvent"`.
pub fn camelize(word: &str) -> String {
    word.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// `"ActivityEvent"` becomes `"activity_event"`.
pub fn underscore(word: &str) -> String {
    let word = CAMEL_ACRONYM.replace_all(word, "${1}_${2}");
    let word = CAMEL_WORD.replace_all(&word, "${1}_${2}");
    word.replace('-', "_").to_lowercase()
}

/// The type name for a table or collection name: `"activity_events"` becomes
/// `"ActivityEvent"`.
pub fn classify(name: &str) -> String {
    camelize(&singularize(name))
}

/// The table name for a type name: `"ActivityEvent"` becomes
/// `"activity_events"`.
pub fn tableize(name: &str) -> String {
    pluralize(&underscore(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singulars() {
        assert_eq!(singularize("posts"), "post");
        assert_eq!(singularize("summaries"), "summary");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("wives"), "wife");
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("news"), "news");
        assert_eq!(singularize("sales_people"), "sales_person");
    }

    #[test]
    fn plurals() {
        assert_eq!(pluralize("post"), "posts");
        assert_eq!(pluralize("summary"), "summaries");
        assert_eq!(pluralize("activity_event"), "activity_events");
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("series"), "series");
    }

    #[test]
    fn casing() {
        assert_eq!(camelize("activity_event"), "ActivityEvent");
        assert_eq!(underscore("ActivityEvent"), "activity_event");
        assert_eq!(underscore("HTMLPage"), "html_page");
        assert_eq!(tableize("Person"), "people");
        assert_eq!(classify("people"), "Person");
    }
}

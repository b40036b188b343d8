#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use jsonview::{CodeUnit, View, ViewOptions};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};

/// Option bits, then the seed that picks navigation steps.
const HEADER: usize = 5;
const STRICT_WHITESPACE: u8 = 1;
const UTF16: u8 = 2;

/// Keys and strings are drawn from text that is hard for a scanner: quotes,
/// escapes, and every structural character.
const TRICKY: &[&str] = &["a", "b", "k", "", "a,b", "x:y", "{", "]", "\\\"", "\\\\", " "];
const PADDING: &[u8] = b" \t\n\r\x0b\x0c";

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if max_size <= HEADER || (size >= HEADER && seed % 10 != 0) {
        return fuzzer_mutate(data, size, max_size);
    }

    let mut rng = SmallRng::seed_from_u64(u64::from(seed));
    data[0] = rng.random::<u8>() & (STRICT_WHITESPACE | UTF16);
    data[1..HEADER].copy_from_slice(&rng.random::<u32>().to_le_bytes());

    let mut noise = vec![0u8; rng.random_range(16..256)];
    rng.fill(&mut noise[..]);
    let value = Document::arbitrary(&mut Unstructured::new(&noise))
        .map_or(Value::Null, |doc| doc.0);

    let mut text = serde_json::to_vec(&value).unwrap_or_default();
    if rng.random_bool(0.5) {
        let pad = PADDING[rng.random_range(0..PADDING.len())];
        text.insert(0, pad);
        text.push(pad);
    }

    let len = text.len().min(max_size - HEADER);
    data[HEADER..HEADER + len].copy_from_slice(&text[..len]);
    HEADER + len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// A small document whose keys collide with the lookups `navigate` tries.
struct Document(Value);

impl Document {
    fn tricky(u: &mut Unstructured<'_>) -> arbitrary::Result<String> {
        Ok(String::from(*u.choose(TRICKY)?))
    }

    fn value(u: &mut Unstructured<'_>, depth: u8) -> arbitrary::Result<Value> {
        let choices = if depth == 0 { 5 } else { 7 };
        Ok(match u.choose_index(choices)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::from(u.arbitrary::<i64>()?),
            3 => serde_json::Number::from_f64(u.arbitrary()?).map_or(Value::Null, Value::Number),
            4 => Value::String(Self::tricky(u)?),
            5 => {
                let len = u.int_in_range(0..=4)?;
                Value::Array((0..len).map(|_| Self::value(u, depth - 1)).collect::<Result<_, _>>()?)
            }
            _ => {
                let mut map = Map::new();
                for _ in 0..u.int_in_range(0..=4)? {
                    map.insert(Self::tricky(u)?, Self::value(u, depth - 1)?);
                }
                Value::Object(map)
            }
        })
    }
}

impl<'a> Arbitrary<'a> for Document {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let depth = u.int_in_range(0..=3)?;
        Ok(Document(Self::value(u, depth)?))
    }
}

/// Walks `view` along a pseudo-random path derived from `seed`, touching
/// every accessor on the way. None of them may panic.
fn navigate<C: CodeUnit>(view: View<'_, C>, mut seed: u32, keys: &[String]) {
    let mut view = view;
    for _ in 0..8 {
        let _ = (
            view.kind(),
            view.size(),
            view.string_view(),
            view.integer(),
            view.float(),
            view.is_float(),
            view.object().len(),
            view.to_string(),
        );
        view = match seed & 3 {
            0 => view.at_index((seed >> 2) as usize % 4),
            1 => keys
                .get((seed >> 2) as usize % keys.len().max(1))
                .map_or(view.value(), |k| view.at(k)),
            2 => view.value(),
            _ => view.key(),
        };
        seed = seed.rotate_right(3);
    }
}

/// On input `serde_json` accepts, every member it sees must be found.
fn check_against_serde(view: View<'_>, value: &Value) {
    match value {
        Value::Array(items) => {
            assert_eq!(view.size(), items.len(), "array size of {view}");
            for (i, item) in items.iter().enumerate() {
                check_against_serde(view.at_index(i), item);
            }
        }
        Value::Object(map) => {
            for (k, v) in map {
                let raw = serde_json::to_string(k).expect("string serializes");
                let child = view.at(&raw[1..raw.len() - 1]);
                assert!(!child.is_empty(), "member {raw} not found in {view}");
                check_against_serde(child, v);
            }
        }
        Value::Bool(b) => assert_eq!(view.boolean(), *b, "boolean {view}"),
        Value::Null => assert!(view.is_null(), "null {view}"),
        _ => {}
    }
}

fn target(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let seed = u32::from_le_bytes(data[1..HEADER].try_into().unwrap());
    let data = &data[HEADER..];
    let options = ViewOptions {
        strict_whitespace: flags & STRICT_WHITESPACE != 0,
    };

    let text = String::from_utf8_lossy(data);
    let keys: Vec<String> = match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    };

    if flags & UTF16 != 0 {
        let units: Vec<u16> = text.encode_utf16().collect();
        navigate(View::with_options(&units, options), seed, &keys);
    } else {
        navigate(View::with_options(data, options), seed, &keys);
    }

    // Duplicate keys make serde_json keep the last value while views keep the
    // first, and escapes make raw keys differ from decoded ones.
    if !options.strict_whitespace && !text.contains('\\') {
        if let Ok(value) = serde_json::from_str::<Value>(&text) {
            if !has_duplicate_keys(View::from(text.as_ref())) {
                check_against_serde(View::from(text.as_ref()), &value);
            }
        }
    }
}

fn has_duplicate_keys(view: View<'_>) -> bool {
    let mut seen = std::collections::HashSet::new();
    view.entries().any(|m| !seen.insert(m.key.string_view()))
        || view.iter().any(|e| has_duplicate_keys(e.value()))
}

fuzz_target!(|data: &[u8]| target(data));

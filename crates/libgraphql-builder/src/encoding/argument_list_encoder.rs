use crate::encoding::write_value;
use crate::Value;
use indexmap::IndexMap;

/// Encodes a named-argument map as `name1: value1, name2: value2`, in
/// insertion order and without surrounding parentheses.
///
/// An empty map encodes to an empty string; callers decide whether to omit
/// the parentheses entirely.
pub fn encode_arguments(arguments: &IndexMap<String, Value>) -> String {
    let mut out = String::new();
    write_arguments(&mut out, arguments);
    out
}

/// Appends the encoded form of `arguments` (see [`encode_arguments`]) to
/// `out`.
pub fn write_arguments(out: &mut String, arguments: &IndexMap<String, Value>) {
    for (i, (name, value)) in arguments.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(name);
        out.push_str(": ");
        write_value(out, value);
    }
}

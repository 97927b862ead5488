// Recursive document combination: objects merge key-by-key, arrays
// concatenate, scalar conflicts take the overlay's value.
use serde_json::Value;
use serde_json::map::Entry;

/// Deep-merges `overlay` into `base` and returns the combined value.
///
/// Nested objects merge recursively; arrays concatenate with the overlay's
/// elements appended after the base's; any other pairing is resolved by
/// taking the overlay value wholesale.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.entry(key) {
                    // Entry + take instead of Map::remove, which swap-removes
                    // under preserve_order and would scramble key order.
                    Entry::Occupied(mut slot) => {
                        let base_value = slot.get_mut().take();
                        *slot.get_mut() = deep_merge(base_value, overlay_value);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(overlay_value);
                    }
                }
            }
            Value::Object(base_map)
        }
        (Value::Array(mut base_items), Value::Array(overlay_items)) => {
            base_items.extend(overlay_items);
            Value::Array(base_items)
        }
        (_, overlay) => overlay,
    }
}

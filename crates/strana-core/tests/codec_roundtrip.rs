//! Property coverage for the flat codec.

use proptest::prelude::*;
use strana_core::{decode_table, encode_table};
use strana_model::{NamedTable, Row};

fn table_strategy() -> impl Strategy<Value = NamedTable> {
    let columns = prop::collection::btree_set("[A-Za-z][A-Za-z0-9]{0,7}", 1..5)
        .prop_map(|set| set.into_iter().collect::<Vec<String>>());
    columns
        .prop_flat_map(|columns| {
            let width = columns.len();
            let rows =
                prop::collection::vec(prop::collection::vec("[ -~]{0,8}", width..=width), 0..6);
            (Just(columns), rows)
        })
        .prop_map(|(columns, rows)| {
            let mut table = NamedTable::new("T", columns.clone());
            for cells in rows {
                table.push_row(columns.iter().cloned().zip(cells).collect::<Row>());
            }
            table
        })
}

proptest! {
    // Encoding then decoding with the table's own shape reproduces the
    // table, including rows whose cells hold the empty sentinel.
    #[test]
    fn encode_decode_round_trips(table in table_strategy()) {
        let values: Vec<Option<String>> =
            encode_table(&table).into_iter().map(Some).collect();
        let decoded =
            decode_table(&table.name, &table.columns, table.record_count(), &values)
                .expect("decode");
        prop_assert_eq!(decoded, table);
    }

    // The flat length invariant holds for every generated table.
    #[test]
    fn encoded_length_matches_shape(table in table_strategy()) {
        let values = encode_table(&table);
        prop_assert_eq!(values.len(), table.record_count() * table.columns.len());
    }
}

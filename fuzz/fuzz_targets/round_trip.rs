#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate lax_csv;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let table = lax_csv::parse(s);

        assert_eq!(lax_csv::parse(&lax_csv::stringify(&table)), table);
    }
});

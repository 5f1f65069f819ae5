//! Embedded word list generated at build time

include!(concat!(env!("OUT_DIR"), "/words_en_5.rs"));

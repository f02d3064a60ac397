pub mod lovelace;

pub mod p001_trade_table;

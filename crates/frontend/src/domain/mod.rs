pub mod a001_trade_run;

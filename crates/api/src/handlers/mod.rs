pub mod store_app;

mod entity_test;
mod helpers;
mod http_test;
mod user_test;

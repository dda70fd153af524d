use std::sync::Arc;

use crate::constants::HELLO_WORLD_INTERFACE;
use crate::container::ServiceInterface;

pub trait HelloWorld: Send + Sync {
    fn hello_world(&self) -> String;
}

impl ServiceInterface for dyn HelloWorld {
    const TYPE_NAME: &'static str = HELLO_WORLD_INTERFACE;
}

pub struct EnglishHelloWorld;

impl HelloWorld for EnglishHelloWorld {
    fn hello_world(&self) -> String {
        "Hello World!".to_string()
    }
}

pub fn english_hello_world() -> Arc<dyn HelloWorld> {
    Arc::new(EnglishHelloWorld)
}

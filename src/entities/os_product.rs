use crate::Product;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Windows;

impl Product for Windows {
    fn operation(&self) -> String {
        "{Result of Windows}".to_string()
    }

    fn name(&self) -> &'static str {
        "Windows"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacOS;

impl Product for MacOS {
    fn operation(&self) -> String {
        "{Result of MacOS}".to_string()
    }

    fn name(&self) -> &'static str {
        "MacOS"
    }
}

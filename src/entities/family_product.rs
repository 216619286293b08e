use crate::{AbstractProductA, AbstractProductB, Family, PatternError, ensure_same_family};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA1;

impl AbstractProductA for ConcreteProductA1 {
    fn family(&self) -> Family {
        Family::One
    }

    fn useful_function_a(&self) -> String {
        "The result of the product A1.".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA2;

impl AbstractProductA for ConcreteProductA2 {
    fn family(&self) -> Family {
        Family::Two
    }

    fn useful_function_a(&self) -> String {
        "The result of the product A2.".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB1;

impl AbstractProductB for ConcreteProductB1 {
    fn family(&self) -> Family {
        Family::One
    }

    fn useful_function_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn another_useful_function_b(
        &self,
        collaborator: &dyn AbstractProductA,
    ) -> Result<String, PatternError> {
        ensure_same_family(self.family(), collaborator)?;
        Ok(format!(
            "The result of the B1 collaborating with the ({})",
            collaborator.useful_function_a()
        ))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB2;

impl AbstractProductB for ConcreteProductB2 {
    fn family(&self) -> Family {
        Family::Two
    }

    fn useful_function_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn another_useful_function_b(
        &self,
        collaborator: &dyn AbstractProductA,
    ) -> Result<String, PatternError> {
        ensure_same_family(self.family(), collaborator)?;
        Ok(format!(
            "The result of the B2 collaborating with the ({})",
            collaborator.useful_function_a()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b1_collaborates_with_a1() {
        let result = ConcreteProductB1.another_useful_function_b(&ConcreteProductA1);
        assert_eq!(
            result.unwrap(),
            "The result of the B1 collaborating with the (The result of the product A1.)"
        );
    }

    #[test]
    fn test_b2_rejects_a1() {
        let result = ConcreteProductB2.another_useful_function_b(&ConcreteProductA1);
        assert_eq!(
            result,
            Err(PatternError::IncompatibleFamily {
                expected: Family::Two,
                found: Family::One,
            })
        );
    }
}

use crate::instruction::Instruction;
use crate::tree::{Element, TreeBuilder, XmlDocument};
use crate::{LANGUAGE, Program};

/// Projects a validated Program onto the `program / instruction / argN` tree.
pub struct ProgramSerializer {
    tree: TreeBuilder,
}

impl ProgramSerializer {
    pub fn new() -> Self {
        ProgramSerializer {
            tree: TreeBuilder::new(Element::new("program").with_attribute("language", LANGUAGE)),
        }
    }

    pub fn serialize(mut self, program: &Program) -> XmlDocument {
        for instruction in &program.instructions {
            self.tree.append(instruction_element(instruction));
        }
        self.tree.finish()
    }
}

impl Default for ProgramSerializer {
    fn default() -> Self {
        Self::new()
    }
}

fn instruction_element(instruction: &Instruction) -> Element {
    let mut element = Element::new("instruction")
        .with_attribute("order", instruction.order.to_string())
        .with_attribute("opcode", instruction.opcode_upper());

    for (index, operand) in instruction.operands.iter().enumerate() {
        element.push_child(
            Element::new(format!("arg{}", index + 1))
                .with_attribute("type", operand.kind.name())
                .with_text(operand.value.as_str()),
        );
    }

    element
}

/// Shorthand for `ProgramSerializer::new().serialize(program)`.
pub fn serialize(program: &Program) -> XmlDocument {
    ProgramSerializer::new().serialize(program)
}

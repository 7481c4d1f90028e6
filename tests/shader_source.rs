extern crate glquad;

use glquad::video::errors::Error;
use glquad::video::prelude::*;

#[test]
fn load() {
    let source = ShaderProgramSource::load("tests/resources/basic.shader").unwrap();

    assert!(source.vertex.starts_with("#version 330 core\n"));
    assert!(source.vertex.contains("gl_Position = position;"));
    assert!(!source.vertex.contains("#shader"));
    assert!(!source.vertex.contains("u_Color"));

    assert!(source.fragment.starts_with("#version 330 core\n"));
    assert!(source.fragment.contains("uniform vec4 u_Color;"));
    assert!(source.fragment.contains("color = u_Color;"));
    assert!(!source.fragment.contains("gl_Position"));

    assert!(source.validate().is_ok());
}

#[test]
fn parse() {
    let text = "#shader vertex\nvoid main() {}\n#shader fragment\nout vec4 c;\nvoid main() {}\n";
    let source = ShaderProgramSource::parse(text);

    assert_eq!(source.vertex, "void main() {}\n");
    assert_eq!(source.fragment, "out vec4 c;\nvoid main() {}\n");
    assert_eq!(source.section(ShaderStage::Vertex), "void main() {}\n");
}

#[test]
fn load_missing() {
    match ShaderProgramSource::load("tests/resources/missing.shader") {
        Err(Error::Io(_)) => {}
        v => panic!("unexpected {:?}", v),
    }
}

#[test]
fn single_section() {
    let source = ShaderProgramSource::parse("#shader vertex\nvoid main() {}\n");
    assert_eq!(source.fragment, "");

    match source.validate() {
        Err(Error::ShaderSectionMissing(ShaderStage::Fragment)) => {}
        v => panic!("unexpected {:?}", v),
    }
}

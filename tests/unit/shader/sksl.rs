use super::*;

#[test]
fn declares_every_uniform_in_layout_order() {
    let src = stroke_shader_source();
    let mut last = 0;
    for slot in UNIFORM_LAYOUT {
        let ty = match slot.kind {
            UniformKind::Float => "float",
            UniformKind::Int => "int",
        };
        let decl = format!("uniform {ty} {}", slot.name);
        let at = src
            .find(&decl)
            .unwrap_or_else(|| panic!("missing declaration of {}", slot.name));
        assert!(at >= last, "{} declared out of order", slot.name);
        last = at;
    }
}

#[test]
fn fixed_capacities_are_baked_in() {
    let src = stroke_shader_source();
    assert!(src.contains("uniform float u_points[1000];"));
    assert!(src.contains("uniform float u_distances[500];"));
    assert!(src.contains("uniform float u_colors[400];"));
    assert!(src.contains("uniform float u_intersections[10];"));
    assert!(src.contains("uniform int u_numPoints;"));
    assert!(src.contains("const int MAX_SAMPLES = 500;"));
    assert!(src.contains("const int MAX_INTERSECTIONS = 2;"));
    assert!(src.contains("vec4 main(vec2 pos)"));
}

#[test]
fn every_declaration_sits_on_its_own_line() {
    let src = stroke_shader_source();
    let header: Vec<&str> = src.lines().take(UNIFORM_LAYOUT.len()).collect();
    assert_eq!(header.len(), UNIFORM_LAYOUT.len());
    for (line, slot) in header.iter().zip(UNIFORM_LAYOUT) {
        assert!(line.starts_with("uniform "), "{line}");
        assert!(line.ends_with(';'), "{line}");
        assert!(line.contains(slot.name), "{line}");
    }
    assert!(src.contains("const int MAX_BREAKPOINTS = 100;\n"));
}

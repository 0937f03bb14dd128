use crate::uniforms::bundle::{UNIFORM_LAYOUT, UniformKind};

const BODY: &str = r#"
float distanceSquared(vec2 a, vec2 b) {
  vec2 d = a - b;
  return dot(d, d);
}

float getClosestDistance(vec2 pos) {
  float bestSq = distanceSquared(pos, vec2(u_points[0], u_points[1]));
  float best = u_distances[0];
  float thrSq = u_searchThreshold * u_searchThreshold;
  for (int i = 1; i < MAX_SAMPLES; i++) {
    if (i >= u_numPoints) { break; }
    float dSq = distanceSquared(pos, vec2(u_points[2 * i], u_points[2 * i + 1]));
    if (dSq < bestSq) {
      bestSq = dSq;
      best = u_distances[i];
      if (dSq < thrSq) { break; }
    }
  }
  return best;
}

float distanceToSegment(vec2 p, vec2 a, vec2 b, out float along) {
  vec2 ab = b - a;
  float len = length(ab);
  if (len <= 0.000001) {
    along = 0.0;
    return length(p - a);
  }
  along = clamp(dot(p - a, ab) / len, 0.0, len);
  return length(p - (a + ab * (along / len)));
}

float intersectionBypass(vec2 pos, float frontLen, float backLen) {
  for (int k = 0; k < MAX_INTERSECTIONS; k++) {
    if (k >= u_numIntersections) { break; }
    float dk = u_intersections[5 * k];
    vec2 p1 = vec2(u_intersections[5 * k + 1], u_intersections[5 * k + 2]);
    vec2 p2 = vec2(u_intersections[5 * k + 3], u_intersections[5 * k + 4]);
    float along;
    float dist = distanceToSegment(pos, p1, p2, along);
    float segLen = length(p2 - p1);
    if (dist <= u_strokeWidth / 2.0
        && frontLen + segLen > dk + along
        && frontLen >= dk - u_tangentStartAdjustment
        && backLen < dk) {
      return dk;
    }
  }
  return -1.0;
}

vec4 colorAt(float fraction) {
  vec4 first = vec4(u_colors[0], u_colors[1], u_colors[2], u_colors[3]);
  if (u_numBreakpoints <= 1 || fraction <= u_breakpoints[0]) { return first; }
  for (int i = 0; i < MAX_BREAKPOINTS - 1; i++) {
    if (i >= u_numBreakpoints - 1) { break; }
    float lo = u_breakpoints[i];
    float hi = u_breakpoints[i + 1];
    vec4 b = vec4(u_colors[4 * (i + 1)], u_colors[4 * (i + 1) + 1],
                  u_colors[4 * (i + 1) + 2], u_colors[4 * (i + 1) + 3]);
    if (fraction <= hi) {
      if (hi <= lo) { return b; }
      vec4 a = vec4(u_colors[4 * i], u_colors[4 * i + 1], u_colors[4 * i + 2], u_colors[4 * i + 3]);
      return mix(a, b, smoothstep(0.0, 1.0, (fraction - lo) / (hi - lo)));
    }
    if (i == u_numBreakpoints - 2) { return b; }
  }
  return first;
}

vec4 main(vec2 pos) {
  float frontLen = u_progressFront * u_totalLength;
  float backLen = u_progressBack * u_totalLength;
  if (u_totalLength <= 0.0 || u_progressFront <= 0.0
      || u_progressBack >= 1.0 || u_progressBack >= u_progressFront) {
    return vec4(0.0);
  }

  float d = getClosestDistance(pos);
  if (d > frontLen) { return vec4(0.0); }
  if (d < backLen) {
    float dk = intersectionBypass(pos, frontLen, backLen);
    if (dk < 0.0) { return vec4(0.0); }
    d = dk;
  }

  vec4 color = colorAt(d / u_totalLength);
  float u = (d - backLen) / (frontLen - backLen);
  float k = 1.0;
  if (u_progressFront < 1.0 && u_falloffFront < 1.0) {
    k *= 1.0 - smoothstep(u_falloffFront, 1.0, u);
  }
  if (u_progressBack > 0.0 && u_falloffBack < 1.0) {
    k *= smoothstep(0.0, 1.0 - u_falloffBack, u);
  }
  return color * (k * u_progressAlpha);
}
"#;

/// SkSL runtime-effect source of the stroke shader.
///
/// Uniforms are declared from [`UNIFORM_LAYOUT`], so the program and
/// [`crate::UniformBundle::to_bytes`] always agree on order and capacity.
pub fn stroke_shader_source() -> String {
    let mut src = String::new();
    for slot in UNIFORM_LAYOUT {
        let ty = match slot.kind {
            UniformKind::Float => "float",
            UniformKind::Int => "int",
        };
        if slot.len == 1 {
            src.push_str(&format!("uniform {ty} {};\n", slot.name));
        } else {
            src.push_str(&format!("uniform {ty} {}[{}];\n", slot.name, slot.len));
        }
    }
    src.push_str(&format!(
        "\nconst int MAX_SAMPLES = {};\nconst int MAX_BREAKPOINTS = {};\nconst int MAX_INTERSECTIONS = {};\n",
        crate::path::sampling::MAX_SAMPLES,
        crate::paint::schema::MAX_BREAKPOINTS,
        crate::path::intersection::MAX_INTERSECTIONS,
    ));
    src.push_str(BODY);
    src
}

#[cfg(test)]
#[path = "../../tests/unit/shader/sksl.rs"]
mod tests;

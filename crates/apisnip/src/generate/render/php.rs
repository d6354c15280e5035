use super::{BoundRequest, query_suffix};

/// PHP via the curl extension; the verb is set as an uppercase
/// `CURLOPT_CUSTOMREQUEST` string.
pub fn render(request: &BoundRequest) -> String {
  let send_form = request.body.is_none() && !request.form.is_empty();

  let mut code = String::new();
  code.push_str("<?php\n\n");
  code.push_str("$ch = curl_init();\n\n");

  code.push_str(&format!(
    "curl_setopt($ch, CURLOPT_URL, '{}{}');\n",
    request.url,
    query_suffix(request)
  ));
  code.push_str("curl_setopt($ch, CURLOPT_RETURNTRANSFER, true);\n");
  code.push_str(&format!(
    "curl_setopt($ch, CURLOPT_CUSTOMREQUEST, '{}');\n",
    request.method.to_uppercase()
  ));

  if !request.headers.is_empty() {
    code.push_str("\n$headers = [\n");
    for (name, value) in &request.headers {
      code.push_str(&format!("    '{name}: {value}',\n"));
    }
    code.push_str("];\n");
    code.push_str("curl_setopt($ch, CURLOPT_HTTPHEADER, $headers);\n");
  }

  if let Some(body) = &request.body {
    // Spliced verbatim; the value must already be a PHP expression.
    code.push_str(&format!("\ncurl_setopt($ch, CURLOPT_POSTFIELDS, json_encode({body}));\n"));
  } else if send_form {
    code.push_str("\ncurl_setopt($ch, CURLOPT_POSTFIELDS, http_build_query([\n");
    for (name, value) in &request.form {
      code.push_str(&format!("    '{name}' => '{value}',\n"));
    }
    code.push_str("]));\n");
  }

  code.push_str("\n$response = curl_exec($ch);\n");
  code.push_str("$status = curl_getinfo($ch, CURLINFO_HTTP_CODE);\n");
  code.push_str("curl_close($ch);\n\n");

  code.push_str("echo $status . \"\\n\";\n");
  code.push_str("echo $response;\n");

  code
}

/// Build the test-generation prompt for `code`.
///
/// `import_path` is the path exactly as the user typed it; the generated test
/// imports the code under test from there.
pub fn build_prompt(code: &str, import_path: &str) -> String {
    format!(
        r#"Você é um especialista em Node.js e testes automatizados (PT/BR).
Gere testes automatizados para o seguinte código usando Jest. Siga estas instruções **à risca**:
1. Use `require` para importar os métodos do código e do `@jest/globals`.
2. Certifique-se de importar corretamente os métodos do `@jest/globals` (describe, it, expect, TODOS OS METODOS QUE PRECISAREM PARA OS TESTES).
3. O caminho para importar os métodos do código deve ser `{import_path}`.
4. Forneça **apenas o código dos testes**, sem explicações ou comentários adicionais.
5. Mantenha o foco em cobrir todos os cenários possíveis (casos de sucesso e erro) para garantir a robustez dos testes.
Aqui está o código que deve ser testado:
```javascript
{code}
```"#
    )
    .trim()
    .to_string()
}

//! Raw Tera sources for every prompt the crate sends.

pub(super) const TRANSFORM_TEMPLATE: &str = "\
次の【入力文】の文体だけを書き換えること。意味、情報、段落構成、固有名詞、数値は一切変えず、内容の追加・削除・要約もしないこと。
{% if corrective %}
【前回の出力の問題点】
{{ corrective }}
{% endif %}
【文体: {{ label }}】
{{ tone }}
{% if strict_tone %}{{ strict_tone }}
{% endif %}\
{% if directives %}
【構成上の指示】
{% for directive in directives %}- {{ directive }}
{% endfor %}\
{% endif %}
【句読点】
{{ punctuation }}

【出力形式】
{% for rule in hygiene %}- {{ rule }}
{% endfor %}\
{% if strict %}
【最終確認】
{{ self_check }}
{% for line in reinforcement %}{{ line }}
{% endfor %}\
{% endif %}\
{% if sample_before %}
【参考例】
変換前: {{ sample_before }}
変換後: {{ sample_after }}
{% endif %}
【入力文】
<<<TEXT
{{ text }}
TEXT>>>";

pub(super) const AI_CHECK_TEMPLATE: &str = "\
あなたは日本語文章の監査担当者である。次の文章が生成AIによって書かれた可能性を評価すること。
判断材料の例: 文末表現の単調な反復、定型的な接続詞、抽象的で無難な言い回し、具体例の欠如、過度に整った構成。
出力は次のキーだけを持つJSONオブジェクト1つのみとし、前置きや説明、コードブロックは付けないこと。
- score: 0から100の整数（100がAI生成の可能性が最も高い）
- confidence: \"low\"、\"medium\"、\"high\" のいずれか
- reasoning: 日本語1〜2文の根拠

<<<TEXT
{{ text }}
TEXT>>>";

//! Label and value patterns for personal-data fields.
//!
//! Label patterns are case-insensitive, must end the text (an optional trailing
//! colon or whitespace is allowed) and require a word boundary before the
//! keyword. Value patterns must span the whole text; group 1 is the value.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Name
    pub static ref NAME_LABEL: Regex = Regex::new(
        r"(?i)\b(?:nombre|name|apellidos?|full\s*name|primer\s*nombre|segundo\s*nombre)[\s:]*$"
    ).unwrap();

    pub static ref NAME_VALUE: Regex = Regex::new(
        r"^\s*([A-Za-zÀ-ÿñÑ\s]{2,50})\s*$"
    ).unwrap();

    // Identification document
    pub static ref DOCUMENT_LABEL: Regex = Regex::new(
        r"(?i)\b(?:documento|dni|cedula|cédula|id|identification|passport|pasaporte|ci)[\s:]*$"
    ).unwrap();

    pub static ref DOCUMENT_VALUE: Regex = Regex::new(
        r"^\s*([0-9.\-]{6,15})\s*$"
    ).unwrap();

    // Email
    pub static ref EMAIL_LABEL: Regex = Regex::new(
        r"(?i)\b(?:email|e-mail|correo|mail)[\s:]*$"
    ).unwrap();

    pub static ref EMAIL_VALUE: Regex = Regex::new(
        r"^\s*([a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,})\s*$"
    ).unwrap();

    // Phone
    pub static ref PHONE_LABEL: Regex = Regex::new(
        r"(?i)\b(?:teléfono|telefono|phone|celular|móvil|movil|tel)[\s:]*$"
    ).unwrap();

    pub static ref PHONE_VALUE: Regex = Regex::new(
        r"^\s*(\+?[0-9\s()\-]{7,20})\s*$"
    ).unwrap();

    // Date (D/M/Y or Y/M/D with '/', '-' or '.')
    pub static ref DATE_LABEL: Regex = Regex::new(
        r"(?i)\b(?:fecha|date|nacimiento|birth|vencimiento|expiry|exp)[\s:]*$"
    ).unwrap();

    pub static ref DATE_VALUE: Regex = Regex::new(
        r"^\s*(\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}|\d{4}[/\-.]\d{1,2}[/\-.]\d{1,2})\s*$"
    ).unwrap();

    // Address
    pub static ref ADDRESS_LABEL: Regex = Regex::new(
        r"(?i)\b(?:dirección|direccion|address|domicilio|residencia)[\s:]*$"
    ).unwrap();

    pub static ref ADDRESS_VALUE: Regex = Regex::new(
        r"^\s*([A-Za-zÀ-ÿñÑ\s0-9#,.\-]{5,100})\s*$"
    ).unwrap();

    // Postal code
    pub static ref POSTAL_CODE_LABEL: Regex = Regex::new(
        r"(?i)\b(?:código\s*postal|codigo\s*postal|zip|postal\s*code|cp)[\s:]*$"
    ).unwrap();

    pub static ref POSTAL_CODE_VALUE: Regex = Regex::new(
        r"^\s*([0-9A-Z]{3,10})\s*$"
    ).unwrap();

    // City
    pub static ref CITY_LABEL: Regex = Regex::new(
        r"(?i)\b(?:ciudad|city|localidad|municipio)[\s:]*$"
    ).unwrap();

    // Country
    pub static ref COUNTRY_LABEL: Regex = Regex::new(
        r"(?i)\b(?:país|pais|country|nacionalidad)[\s:]*$"
    ).unwrap();

    // Profession
    pub static ref PROFESSION_LABEL: Regex = Regex::new(
        r"(?i)\b(?:profesión|profesion|occupation|trabajo|job|cargo|puesto)[\s:]*$"
    ).unwrap();

    // Company
    pub static ref COMPANY_LABEL: Regex = Regex::new(
        r"(?i)\b(?:empresa|company|empleador|organización|organizacion)[\s:]*$"
    ).unwrap();

    pub static ref COMPANY_VALUE: Regex = Regex::new(
        r"^\s*([A-Za-zÀ-ÿñÑ\s0-9&.,]{2,100})\s*$"
    ).unwrap();

    // Salary
    pub static ref SALARY_LABEL: Regex = Regex::new(
        r"(?i)\b(?:salario|salary|sueldo|ingreso|income|wage)[\s:]*$"
    ).unwrap();

    pub static ref SALARY_VALUE: Regex = Regex::new(
        r"^\s*([0-9.,$€£¥]{1,20})\s*$"
    ).unwrap();

    // Gender
    pub static ref GENDER_LABEL: Regex = Regex::new(
        r"(?i)\b(?:género|genero|gender|sexo|sex)[\s:]*$"
    ).unwrap();

    pub static ref GENDER_VALUE: Regex = Regex::new(
        r"(?i)^\s*(masculino|femenino|male|female|m|f|hombre|mujer|otro|other)\s*$"
    ).unwrap();

    // Marital status
    pub static ref MARITAL_STATUS_LABEL: Regex = Regex::new(
        r"(?i)\b(?:estado\s*civil|marital\s*status|civil\s*status)[\s:]*$"
    ).unwrap();

    pub static ref MARITAL_STATUS_VALUE: Regex = Regex::new(
        r"(?i)^\s*(soltero|casado|divorciado|viudo|single|married|divorced|widowed)\s*$"
    ).unwrap();
}
